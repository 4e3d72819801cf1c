//! Run Picker Core Library
//!
//! This crate provides the core functionality for run-picker, an interactive
//! terminal tool that lists the scripts of a `package.json`, lets the user
//! fuzzy-filter them, and runs the chosen one through the package manager.
//!
//! # Key Features
//!
//! - **Manifest Loading**: Read and validate the `scripts` table of a manifest
//! - **Fuzzy Filtering**: Case-insensitive subsequence matching on script names
//! - **Hook Detection**: Hide `pre*`/`post*` and npm lifecycle scripts by default
//! - **Selection State**: A pure state machine driven by decoded key input
//! - **Execution**: One-shot, shell-free launch of `npm run <script>`
//!
//! # Examples
//!
//! Loading scripts and filtering them the way the picker does:
//!
//! ```no_run
//! use run_picker_core::manifest::load_scripts;
//! use run_picker_core::selection::{Input, SelectionState};
//!
//! let scripts = load_scripts("package.json")?;
//! let mut selection = SelectionState::new(scripts, false);
//! selection.handle_input(Input::Text("bld".to_string()));
//! for script in selection.visible_scripts() {
//!     println!("{script}: {}", script.command);
//! }
//! # Ok::<(), run_picker_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod hooks;
pub mod manifest;
pub mod matcher;
pub mod script_definitions;
pub mod selection;
