//! Interactive script selection.
//!
//! This module provides the terminal-based picker: key decoding, the
//! scrolling viewport and the crossterm renderer. The selection rules
//! themselves live in [`run_picker_core::selection`].
//!
//! # User Interface
//!
//! The interface supports:
//! - Typing to filter scripts (fuzzy, case-insensitive)
//! - Up/Down arrows to move the selection, wrapping at either end
//! - Tab to show or hide hook scripts
//! - Enter to run the selected script
//! - Escape or Ctrl+C to quit

pub mod keys;
pub mod types;
pub mod ui;

pub use types::ViewportState;
pub use ui::prompt_for_script_choice;
