//! Demo content hosted inside the controller's containers.
//!
//! The controller is generic over its view type; the demo uses plain text
//! blocks so every state renders something recognizable.

use diptych_core::Side;

/// A titled block of text presented in a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneContent {
    /// Title shown in the pane border.
    pub title: String,
    /// Body lines, wrapped at render time.
    pub body: Vec<String>,
}

impl PaneContent {
    /// Create pane content from a title and body lines.
    pub fn new(title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    /// The primary master pane of the demo scene.
    pub fn primary_master() -> Self {
        Self::new(
            "Library",
            vec![
                "Recently added".into(),
                "  The Long Way Round".into(),
                "  Notes on Layout".into(),
                "  A Field Guide to Panes".into(),
                String::new(),
                "Press Enter to open an item in the detail pane.".into(),
            ],
        )
    }

    /// The secondary master pane of the demo scene.
    pub fn secondary_master() -> Self {
        Self::new(
            "Archive",
            vec![
                "2019-2024".into(),
                "  Drafts (14)".into(),
                "  Published (32)".into(),
                "  Retired (7)".into(),
                String::new(),
                "Press Tab to flip back to the library.".into(),
            ],
        )
    }

    /// Placeholder shown in the detail container before any item is pushed.
    pub fn detail_placeholder() -> Self {
        Self::new(
            "Detail",
            vec![
                "No item selected.".into(),
                String::new(),
                "Press Enter to open an item from the master pane.".into(),
            ],
        )
    }

    /// A detail pane for the n-th opened item.
    pub fn detail(sequence: usize, from: Side) -> Self {
        Self::new(
            format!("Item {sequence}"),
            vec![
                format!("Opened from the {from} master pane."),
                String::new(),
                "This is the detail pane. On a large screen it sits next".into(),
                "to the master; on a small screen it covers it and Esc".into(),
                "slides it back out.".into(),
            ],
        )
    }
}
