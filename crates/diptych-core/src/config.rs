//! Layout and timing policy for the split-view controller.
//!
//! The defaults reproduce the classic 1024x748 landscape tablet layout:
//! a 341-unit master pane and a 682-unit detail pane separated by a
//! one-unit gap, 5-unit rounded corners, a one-second flip and a 250 ms
//! navigation slide. Hosts can override any of it, from a file or in code.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::geometry::{Orientation, Rect, Size};
use crate::state::DisplayState;

/// Geometry and timing policy for a split-view controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Master pane width in the split layout.
    #[serde(default = "default_master_pane_width")]
    pub master_pane_width: u16,

    /// Detail pane width in the split layout.
    #[serde(default = "default_detail_pane_width")]
    pub detail_pane_width: u16,

    /// Height of the layout area in landscape.
    #[serde(default = "default_landscape_height")]
    pub landscape_height: u16,

    /// Gap between the master and detail panes.
    #[serde(default = "default_pane_gap")]
    pub pane_gap: u16,

    /// Corner rounding for containers on the large-screen idiom.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,

    /// Duration of the master flip animation, in milliseconds.
    #[serde(default = "default_flip_duration_ms")]
    pub flip_duration_ms: u64,

    /// Duration of the push/pop navigation slide, in milliseconds.
    #[serde(default = "default_nav_duration_ms")]
    pub nav_duration_ms: u64,
}

fn default_master_pane_width() -> u16 {
    341
}

fn default_detail_pane_width() -> u16 {
    682
}

fn default_landscape_height() -> u16 {
    748
}

fn default_pane_gap() -> u16 {
    1
}

fn default_corner_radius() -> f32 {
    5.0
}

fn default_flip_duration_ms() -> u64 {
    1000
}

fn default_nav_duration_ms() -> u64 {
    250
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            master_pane_width: default_master_pane_width(),
            detail_pane_width: default_detail_pane_width(),
            landscape_height: default_landscape_height(),
            pane_gap: default_pane_gap(),
            corner_radius: default_corner_radius(),
            flip_duration_ms: default_flip_duration_ms(),
            nav_duration_ms: default_nav_duration_ms(),
        }
    }
}

/// Container frames resolved for one orientation and display state.
///
/// `None` means the container is off screen in that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedFrames {
    /// The outer container covering the whole layout area.
    pub container: Rect,
    /// The master container frame, when visible.
    pub master: Option<Rect>,
    /// The detail container frame, when visible.
    pub detail: Option<Rect>,
}

impl LayoutConfig {
    /// Load a layout from a JSON file. Absent fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save this layout to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// A layout whose transitions complete synchronously.
    pub fn instant() -> Self {
        Self {
            flip_duration_ms: 0,
            nav_duration_ms: 0,
            ..Self::default()
        }
    }

    /// Check the layout for values the controller cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.master_pane_width == 0 {
            return Err(ConfigError::Invalid("master_pane_width must be nonzero".into()));
        }
        if self.detail_pane_width == 0 {
            return Err(ConfigError::Invalid("detail_pane_width must be nonzero".into()));
        }
        if self.landscape_height == 0 {
            return Err(ConfigError::Invalid("landscape_height must be nonzero".into()));
        }
        let split_width = u32::from(self.master_pane_width)
            + u32::from(self.pane_gap)
            + u32::from(self.detail_pane_width);
        if split_width > u32::from(u16::MAX) {
            return Err(ConfigError::Invalid(
                "split layout is wider than the coordinate space".into(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ConfigError::Invalid(
                "corner_radius must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }

    /// The layout area in landscape: split width by `landscape_height`.
    pub fn landscape_size(&self) -> Size {
        Size::new(self.split_width(), self.landscape_height)
    }

    /// The layout area in portrait: the landscape area transposed.
    pub fn portrait_size(&self) -> Size {
        self.landscape_size().transposed()
    }

    /// The layout area for a given orientation.
    pub fn area(&self, orientation: Orientation) -> Size {
        if orientation.is_landscape() {
            self.landscape_size()
        } else {
            self.portrait_size()
        }
    }

    /// Duration of the master flip animation.
    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_duration_ms)
    }

    /// Duration of the push/pop navigation slide.
    pub fn nav_duration(&self) -> Duration {
        Duration::from_millis(self.nav_duration_ms)
    }

    /// Resolve container frames for one orientation and display state.
    ///
    /// The split layout keeps the configured pane widths in portrait as
    /// well; panes that overrun the narrower area are clipped by the host.
    pub fn resolve(&self, orientation: Orientation, state: DisplayState) -> ResolvedFrames {
        let area = self.area(orientation);
        let container = Rect::from_size(area);
        match state {
            DisplayState::Master => ResolvedFrames {
                container,
                master: Some(container),
                detail: None,
            },
            DisplayState::Detail => ResolvedFrames {
                container,
                master: None,
                detail: Some(container),
            },
            DisplayState::Split => {
                let master = Rect::new(0, 0, self.master_pane_width, area.height);
                let detail = Rect::new(
                    self.master_pane_width.saturating_add(self.pane_gap),
                    0,
                    self.detail_pane_width,
                    area.height,
                );
                ResolvedFrames {
                    container,
                    master: Some(master),
                    detail: Some(detail),
                }
            }
        }
    }

    fn split_width(&self) -> u16 {
        self.master_pane_width
            .saturating_add(self.pane_gap)
            .saturating_add(self.detail_pane_width)
    }
}

/// Errors that can occur when working with a layout file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing the layout.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing layout JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing the layout to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The layout values fail validation.
    #[error("Invalid layout: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = LayoutConfig::default();
        assert_eq!(config.master_pane_width, 341);
        assert_eq!(config.detail_pane_width, 682);
        assert_eq!(config.pane_gap, 1);
        assert_eq!(config.landscape_size(), Size::new(1024, 748));
        assert_eq!(config.portrait_size(), Size::new(748, 1024));
        assert_eq!(config.flip_duration(), Duration::from_millis(1000));
        assert_eq!(config.nav_duration(), Duration::from_millis(250));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_instant_layout_zeroes_durations() {
        let config = LayoutConfig::instant();
        assert_eq!(config.flip_duration(), Duration::ZERO);
        assert_eq!(config.nav_duration(), Duration::ZERO);
        // Geometry is untouched.
        assert_eq!(config.landscape_size(), Size::new(1024, 748));
    }

    #[test]
    fn test_resolve_split_panes_are_adjacent() {
        let config = LayoutConfig::default();
        let frames = config.resolve(Orientation::LandscapeLeft, DisplayState::Split);
        let master = frames.master.unwrap();
        let detail = frames.detail.unwrap();

        assert_eq!(master, Rect::new(0, 0, 341, 748));
        assert_eq!(detail, Rect::new(342, 0, 682, 748));
        assert_eq!(detail.x, master.right() + config.pane_gap);
        assert_eq!(detail.right(), frames.container.width);
    }

    #[test]
    fn test_resolve_fullscreen_states() {
        let config = LayoutConfig::default();

        let master_only = config.resolve(Orientation::LandscapeLeft, DisplayState::Master);
        assert_eq!(master_only.master, Some(master_only.container));
        assert_eq!(master_only.detail, None);

        let detail_only = config.resolve(Orientation::LandscapeLeft, DisplayState::Detail);
        assert_eq!(detail_only.master, None);
        assert_eq!(detail_only.detail, Some(detail_only.container));
    }

    #[test]
    fn test_resolve_portrait_transposes_area() {
        let config = LayoutConfig::default();
        let frames = config.resolve(Orientation::Portrait, DisplayState::Split);
        assert_eq!(frames.container, Rect::new(0, 0, 748, 1024));
        // Pane widths are fixed; the overrun clips in portrait.
        assert_eq!(frames.master.unwrap().width, 341);
        assert_eq!(frames.detail.unwrap().width, 682);
    }

    #[test]
    fn test_validate_rejects_zero_widths() {
        let config = LayoutConfig {
            master_pane_width: 0,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = LayoutConfig {
            detail_pane_width: 0,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_split() {
        let config = LayoutConfig {
            master_pane_width: u16::MAX,
            detail_pane_width: u16::MAX,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_corner_radius() {
        let config = LayoutConfig {
            corner_radius: -1.0,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = LayoutConfig {
            corner_radius: f32::NAN,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"master_pane_width": 400}"#).unwrap();
        assert_eq!(config.master_pane_width, 400);
        assert_eq!(config.detail_pane_width, 682);
        assert_eq!(config.flip_duration_ms, 1000);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");

        let config = LayoutConfig {
            master_pane_width: 300,
            pane_gap: 2,
            ..LayoutConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = LayoutConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(LayoutConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
