//! Manifest path and package manager resolution.
//!
//! This module provides functions for resolving the manifest path, expanding
//! shell variables like `~`, and picking the package manager executable for the
//! current platform.

/// Default manifest, resolved against the current working directory.
const DEFAULT_MANIFEST_PATH: &str = "package.json";

/// Package manager executable on Windows, where npm ships as a batch shim.
const WINDOWS_PACKAGE_MANAGER: &str = "npm.cmd";
/// Package manager executable everywhere else.
const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Resolves the manifest file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses
/// `package.json` in the current directory. Shell expansions like `~` are
/// resolved.
///
/// # Examples
///
/// ```
/// use run_picker_core::config::get_manifest_path;
///
/// assert_eq!(get_manifest_path(&None), "package.json");
/// assert_eq!(get_manifest_path(&Some("web/package.json".to_string())), "web/package.json");
/// ```
pub fn get_manifest_path(manifest_path_arg: &Option<String>) -> String {
    let manifest_path = match manifest_path_arg {
        Some(manifest_path) => manifest_path,
        None => DEFAULT_MANIFEST_PATH,
    };

    shellexpand::tilde(manifest_path).to_string()
}

/// Package manager executable for the given `std::env::consts::OS` value.
#[must_use]
pub fn package_manager_command_for(target_os: &str) -> &'static str {
    match target_os {
        "windows" => WINDOWS_PACKAGE_MANAGER,
        _ => DEFAULT_PACKAGE_MANAGER,
    }
}

/// Package manager executable for the platform this binary runs on.
#[must_use]
pub fn package_manager_command() -> &'static str {
    package_manager_command_for(std::env::consts::OS)
}
