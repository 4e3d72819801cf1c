//! Run Picker CLI Library
//!
//! This crate provides the command-line interface for run-picker, an
//! interactive picker for the scripts in a `package.json`. It handles
//! argument parsing and the terminal UI; loading, filtering and running
//! scripts is done by `run_picker_core`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`script_selection`]: Interactive UI for picking a script
//!
//! # Examples
//!
//! The CLI binary (`run`) is used from a package directory:
//!
//! ```bash
//! # Pick from the scripts in ./package.json
//! run
//!
//! # Start with hook scripts visible
//! run --show-hooks
//!
//! # Read another manifest
//! run --manifest-path packages/web/package.json
//! ```

pub mod cli_args;
pub mod script_selection;
