//! Running the selected script through the package manager.
//!
//! The script name is handed to `npm run` as a discrete argument; no shell is
//! involved on our side, so a crafted name cannot inject extra commands. The
//! child shares the terminal with this process and is waited on without any
//! timeout.

use std::process::{Command, Stdio};

use log::{debug, info};

use crate::config::package_manager_command;
use crate::error::{Error, Result};

/// Starts a child process and waits for it to finish.
pub trait Launcher {
    /// Runs `program` with `args`, returning the child's exit code.
    ///
    /// The code is `None` when the child was terminated by a signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the child cannot be spawned or waited on.
    fn launch(&self, program: &str, args: &[&str]) -> std::io::Result<Option<i32>>;
}

/// Launches real processes that inherit this process's standard streams.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &str, args: &[&str]) -> std::io::Result<Option<i32>> {
        let exit_status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?
            .wait()?;

        Ok(exit_status.code())
    }
}

/// Arguments passed to the package manager to run `script_name`.
#[must_use]
pub fn run_arguments(script_name: &str) -> [&str; 2] {
    ["run", script_name]
}

/// Runs at most one script per lifetime and maps its outcome to a result.
pub struct ExecutionController<L: Launcher> {
    launcher: L,
    program: String,
    executed: bool,
}

impl ExecutionController<SystemLauncher> {
    /// Controller that runs the platform's package manager for real.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemLauncher, package_manager_command())
    }
}

impl<L: Launcher> ExecutionController<L> {
    pub fn new(launcher: L, program: impl Into<String>) -> Self {
        Self {
            launcher,
            program: program.into(),
            executed: false,
        }
    }

    #[must_use]
    pub fn is_executed(&self) -> bool {
        self.executed
    }

    #[must_use]
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Runs `script_name` and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A script was already run by this controller
    /// - The package manager cannot be launched
    /// - The script exits with a non-zero code or is killed by a signal
    pub fn run(&mut self, script_name: &str) -> Result<()> {
        if self.executed {
            return Err(Error::AlreadyExecuted);
        }
        self.executed = true;

        let args = run_arguments(script_name);
        println!("\nExecuting: {} {}\n", self.program, args.join(" "));
        info!("Launching `{}` with arguments {:?}", self.program, args);

        let code = self
            .launcher
            .launch(&self.program, &args)
            .map_err(Error::ChildSpawn)?;
        debug!("Script `{}` finished with code {:?}", script_name, code);

        match code {
            Some(0) => Ok(()),
            code => Err(Error::ChildFailureExit { code }),
        }
    }
}
