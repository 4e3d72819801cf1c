use std::fmt::{Display, Formatter};

/// Longest script name accepted from a manifest.
pub const MAX_SCRIPT_NAME_LENGTH: usize = 100;

/// A named script entry from the manifest's `scripts` table.
///
/// The command is never parsed or executed directly; it is only shown to the
/// user. Running a script goes through the package manager by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub name: String,
    pub command: String,
}

impl Script {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

impl Display for Script {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

fn is_valid_script_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

/// Checks a script name against `^[A-Za-z0-9\-_:.]{1,100}$`.
#[must_use]
pub fn is_valid_script_name(name: &str) -> bool {
    // All accepted characters are ASCII, so the byte length is the char count.
    !name.is_empty()
        && name.len() <= MAX_SCRIPT_NAME_LENGTH
        && name.chars().all(is_valid_script_name_char)
}
