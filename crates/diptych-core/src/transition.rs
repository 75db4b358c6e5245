//! Animated transition lifecycle.
//!
//! The controller never blocks for an animation. Starting one records an
//! [`ActiveTransition`]; the host drives it forward with
//! [`SplitViewController::advance`](crate::controller::SplitViewController::advance)
//! from its own clock, and the state change lands when the transition
//! completes.

use std::time::Duration;

use crate::state::Side;

/// The kind of transition between layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Master container flipping between sides (large-screen idiom).
    Flip {
        /// Side shown when the flip started.
        from: Side,
        /// Side shown once the flip lands.
        to: Side,
    },
    /// Detail pane sliding in over the master (small-screen idiom).
    NavPush,
    /// Detail pane sliding back out (small-screen idiom).
    NavPop {
        /// Master side revealed once the pop lands.
        to: Side,
    },
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flip { .. } => write!(f, "flip"),
            Self::NavPush => write!(f, "push"),
            Self::NavPop { .. } => write!(f, "pop"),
        }
    }
}

/// An in-flight animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTransition {
    kind: TransitionKind,
    duration: Duration,
    elapsed: Duration,
}

impl ActiveTransition {
    pub(crate) fn new(kind: TransitionKind, duration: Duration) -> Self {
        Self {
            kind,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// What is animating.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Total animation duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Completion fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let fraction = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        fraction.min(1.0)
    }

    /// Whether the full duration has elapsed.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub(crate) fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_advances_and_clamps() {
        let mut transition =
            ActiveTransition::new(TransitionKind::NavPush, Duration::from_millis(250));
        assert!((transition.progress() - 0.0).abs() < f32::EPSILON);
        assert!(!transition.is_complete());

        transition.advance(Duration::from_millis(125));
        assert!((transition.progress() - 0.5).abs() < 0.01);

        transition.advance(Duration::from_millis(500));
        assert!((transition.progress() - 1.0).abs() < f32::EPSILON);
        assert!(transition.is_complete());
    }

    #[test]
    fn test_zero_duration_is_immediately_complete() {
        let transition = ActiveTransition::new(TransitionKind::NavPush, Duration::ZERO);
        assert!(transition.is_complete());
        assert!((transition.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_kind_labels() {
        let flip = TransitionKind::Flip {
            from: Side::Primary,
            to: Side::Secondary,
        };
        assert_eq!(flip.to_string(), "flip");
        assert_eq!(TransitionKind::NavPush.to_string(), "push");
        assert_eq!(TransitionKind::NavPop { to: Side::Primary }.to_string(), "pop");
    }
}
