//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`StatusBar`] - Top status bar with side, state, and transition info
//! - [`FooterHints`] - Bottom keybinding hints
//! - [`Pane`] - Bordered pane hosting a block of content

mod footer_hints;
mod pane;
mod status_bar;

pub use footer_hints::{FooterHints, KeyHint};
pub use pane::Pane;
pub use status_bar::{StatusBar, StatusBarContent};
