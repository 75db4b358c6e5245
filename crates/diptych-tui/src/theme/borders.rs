//! Border sets with Unicode/ASCII fallback.

use ratatui::symbols::border;

/// Border character sets for panes.
///
/// The rounded/square distinction mirrors the controller's corner radius:
/// containers with rounded corners draw rounded borders, containers without
/// draw plain ones. ASCII mode drops to the portable sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderSet {
    ascii: bool,
}

impl BorderSet {
    /// Create a border set, optionally restricted to ASCII-safe characters.
    pub fn new(ascii: bool) -> Self {
        Self { ascii }
    }

    /// Whether this set is restricted to ASCII-safe characters.
    pub fn is_ascii(&self) -> bool {
        self.ascii
    }

    /// Borders for an unfocused pane with rounded corners.
    pub fn rounded(&self) -> border::Set {
        if self.ascii {
            border::PLAIN
        } else {
            border::ROUNDED
        }
    }

    /// Borders for an unfocused pane with square corners.
    pub fn square(&self) -> border::Set {
        border::PLAIN
    }

    /// Borders for the focused pane.
    pub fn focused(&self) -> border::Set {
        if self.ascii {
            border::DOUBLE
        } else {
            border::THICK
        }
    }
}
