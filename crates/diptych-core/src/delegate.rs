//! Delegate callbacks for rotation and side-flip events.

use crate::geometry::Orientation;
use crate::state::Side;

/// Host callbacks observed by the controller.
///
/// Every method has a default body, so implementors override only what they
/// care about. A controller without a delegate behaves as if every rotation
/// were approved; the default `should_rotate` keeps that policy for
/// delegates that only want the notifications.
pub trait SplitViewDelegate {
    /// Asked before an orientation change is applied. Return `false` to
    /// veto; nothing changes on a veto.
    fn should_rotate(&mut self, orientation: Orientation) -> bool {
        let _ = orientation;
        true
    }

    /// Fired once per approved rotation, before frames are recomputed.
    fn will_rotate(&mut self, orientation: Orientation) {
        let _ = orientation;
    }

    /// Fired before an animated master flip starts (large-screen idiom
    /// only; the small-screen side switch does not flip).
    fn will_flip_to_side(&mut self, side: Side) {
        let _ = side;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SilentDelegate;

    impl SplitViewDelegate for SilentDelegate {}

    #[test]
    fn test_default_should_rotate_allows() {
        let mut delegate = SilentDelegate;
        assert!(delegate.should_rotate(Orientation::Portrait));
        assert!(delegate.should_rotate(Orientation::LandscapeRight));
    }

    #[test]
    fn test_default_notifications_are_no_ops() {
        let mut delegate = SilentDelegate;
        delegate.will_rotate(Orientation::Portrait);
        delegate.will_flip_to_side(Side::Secondary);
    }
}
