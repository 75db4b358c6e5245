//! diptych-core: Headless split-view controller
//!
//! This crate provides the state machine behind a two-master split view,
//! including:
//! - Side and display-state tracking with push/pop detail navigation
//! - Large-screen (side-by-side) and small-screen (full-screen) idioms
//! - Host-driven flip and slide transitions with explicit completion
//! - A configurable layout: pane widths, gap, corners, durations
//! - Delegate callbacks for rotation approval and flip notifications

pub mod config;
pub mod controller;
pub mod delegate;
pub mod form_factor;
pub mod geometry;
pub mod state;
pub mod transition;

// Re-export commonly used types
pub use config::{ConfigError, LayoutConfig, ResolvedFrames};
pub use controller::{SplitViewBuilder, SplitViewController, SplitViewError};
pub use delegate::SplitViewDelegate;
pub use form_factor::{FixedFormFactor, FormFactorProvider, Idiom};
pub use geometry::{Container, Orientation, Rect, Size};
pub use state::{DisplayState, Side};
pub use transition::{ActiveTransition, TransitionKind};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
