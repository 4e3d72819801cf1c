use std::process::ExitCode;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

const FAILURE_STATUS: u8 = 1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load npm scripts: could not read `{}`: {}", .path, .original)]
    ManifestIo {
        path: String,
        original: std::io::Error,
    },

    #[error("Failed to load npm scripts: invalid JSON in `{}`: {}", .path, .original)]
    ManifestJson {
        path: String,
        original: serde_json::Error,
    },

    #[error("Failed to load npm scripts: No scripts found in `{}`", .path)]
    MissingScripts { path: String },

    #[error("Failed to load npm scripts: Invalid scripts format in `{}`", .path)]
    InvalidScriptsFormat { path: String },

    #[error("Failed to load npm scripts: No npm scripts detected in `{}`", .path)]
    NoScripts { path: String },

    #[error("Failed to execute script: {}", .0)]
    ChildSpawn(std::io::Error),

    #[error("Script exited with code {}", describe_exit_code(.code))]
    ChildFailureExit { code: Option<i32> },

    #[error("A script has already been executed in this session.")]
    AlreadyExecuted,

    #[error("An interactive terminal is required to select a script.")]
    NotInteractive,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

fn describe_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "null (terminated by a signal)".to_string(),
    }
}

impl Error {
    pub fn manifest_io(path: String, original: std::io::Error) -> Self {
        Self::ManifestIo { path, original }
    }

    pub fn manifest_json(path: String, original: serde_json::Error) -> Self {
        Self::ManifestJson { path, original }
    }

    pub fn missing_scripts(path: String) -> Self {
        Self::MissingScripts { path }
    }

    pub fn invalid_scripts_format(path: String) -> Self {
        Self::InvalidScriptsFormat { path }
    }

    pub fn no_scripts(path: String) -> Self {
        Self::NoScripts { path }
    }

    /// Numeric status the host should terminate with for this error.
    ///
    /// A failing child passes its own code through when it fits in a process
    /// exit status; everything else is a plain failure.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::ChildFailureExit { code: Some(code) } => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(FAILURE_STATUS),
            _ => FAILURE_STATUS,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
