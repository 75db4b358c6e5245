//! Core enumerations for the split-view controller.
//!
//! - `Side`: which master pane is logically active.
//! - `DisplayState`: which panes are on screen.

use serde::{Deserialize, Serialize};

/// Which master pane is logically active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The first master pane.
    #[default]
    Primary,
    /// The second master pane.
    Secondary,
}

impl Side {
    /// The other master side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// Which panes the controller is currently presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    /// The active master pane fills the container.
    #[default]
    Master,
    /// The detail pane fills the container.
    Detail,
    /// Master and detail side by side (large-screen idiom only).
    Split,
}

impl DisplayState {
    /// Whether the detail container is on screen in this state.
    pub fn shows_detail(self) -> bool {
        matches!(self, Self::Detail | Self::Split)
    }

    /// Whether the master container is on screen in this state.
    pub fn shows_master(self) -> bool {
        matches!(self, Self::Master | Self::Split)
    }
}

impl std::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Master => write!(f, "master"),
            Self::Detail => write!(f, "detail"),
            Self::Split => write!(f, "split"),
        }
    }
}
