//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the `run` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use run_picker_cli::cli_args::Args;
///
/// let args = Args::parse_from(["run", "--show-hooks"]);
/// assert!(args.show_hooks);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "run",
    version,
    about = "Interactively pick and run a script from package.json"
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Show hook scripts (pre*/post* and npm lifecycle scripts) by default.
    ///
    /// Hook visibility can still be toggled with Tab while selecting.
    #[arg(long, short = 's', action)]
    pub show_hooks: bool,

    /// Path to the manifest to read scripts from.
    ///
    /// If not provided, defaults to `package.json` in the current directory.
    #[arg(long, short = 'm')]
    pub manifest_path: Option<String>,
}
