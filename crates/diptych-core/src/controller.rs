//! The split-view controller: ownership of views, the side/state machine,
//! transitions, and the layout pass.
//!
//! The controller is headless. It owns two master views and an optional
//! detail view of some host type `V`, decides which containers are visible
//! and where their frames sit, and records animated transitions for the
//! host to drive via [`SplitViewController::advance`]. Presentation state
//! changes only when a transition completes, so what the accessors report
//! always matches what is on screen.

use std::time::Duration;

use tracing::debug;

use crate::config::{ConfigError, LayoutConfig};
use crate::delegate::SplitViewDelegate;
use crate::form_factor::{FixedFormFactor, FormFactorProvider, Idiom};
use crate::geometry::{Container, Orientation};
use crate::state::{DisplayState, Side};
use crate::transition::{ActiveTransition, TransitionKind};

type BoxedFormFactor = Box<dyn FormFactorProvider + Send>;
type BoxedDelegate = Box<dyn SplitViewDelegate + Send>;

/// Errors surfaced by controller operations.
#[derive(Debug, thiserror::Error)]
pub enum SplitViewError {
    /// An operation was requested while a transition is still animating.
    /// Requests are rejected, not queued; retry after the transition
    /// completes.
    #[error("a {in_flight} transition is still in flight")]
    TransitionInFlight {
        /// The transition that was animating when the request arrived.
        in_flight: TransitionKind,
    },

    /// The layout configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A container controller presenting one of two master panes plus a detail
/// pane: side by side on the large-screen idiom, as a single full-screen
/// pane with push/pop navigation on the small-screen idiom.
pub struct SplitViewController<V> {
    config: LayoutConfig,
    form_factor: BoxedFormFactor,
    delegate: Option<BoxedDelegate>,

    primary_master: V,
    secondary_master: V,
    detail: Option<V>,
    /// Incoming detail view held until a navigation push completes.
    pending_detail: Option<V>,

    container: Container,
    master_container: Container,
    detail_container: Container,

    current_side: Side,
    current_state: DisplayState,
    default_state: DisplayState,
    orientation: Orientation,
    idiom: Idiom,

    in_flight: Option<ActiveTransition>,
}

/// Builder for [`SplitViewController`].
pub struct SplitViewBuilder<V> {
    primary_master: V,
    secondary_master: V,
    config: LayoutConfig,
    form_factor: BoxedFormFactor,
    delegate: Option<BoxedDelegate>,
    orientation: Orientation,
    default_state: DisplayState,
}

impl<V> SplitViewBuilder<V> {
    /// Override the layout and timing policy.
    #[must_use]
    pub fn layout(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the device idiom source. Defaults to a fixed pad.
    #[must_use]
    pub fn form_factor(mut self, provider: impl FormFactorProvider + Send + 'static) -> Self {
        self.form_factor = Box::new(provider);
        self
    }

    /// Attach a delegate for rotation and flip callbacks.
    #[must_use]
    pub fn delegate(mut self, delegate: impl SplitViewDelegate + Send + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Set the initial interface orientation. Defaults to landscape-left.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the state presented when no detail navigation is active.
    /// Defaults to [`DisplayState::Master`].
    #[must_use]
    pub fn default_state(mut self, state: DisplayState) -> Self {
        self.default_state = state;
        self
    }

    /// Validate the configuration and construct the controller.
    pub fn build(self) -> Result<SplitViewController<V>, SplitViewError> {
        self.config.validate()?;
        let idiom = self.form_factor.idiom();
        // The phone idiom starts on the master pane: Split cannot exist
        // there and Detail makes no sense before a push.
        let initial_state = match idiom {
            Idiom::Pad => self.default_state,
            Idiom::Phone => DisplayState::Master,
        };

        let mut controller = SplitViewController {
            config: self.config,
            form_factor: self.form_factor,
            delegate: self.delegate,
            primary_master: self.primary_master,
            secondary_master: self.secondary_master,
            detail: None,
            pending_detail: None,
            container: Container::new(),
            master_container: Container::new(),
            detail_container: Container::new(),
            current_side: Side::Primary,
            current_state: initial_state,
            default_state: self.default_state,
            orientation: self.orientation,
            idiom,
            in_flight: None,
        };
        controller.relayout();
        Ok(controller)
    }
}

impl<V> SplitViewController<V> {
    /// Start building a controller from its two master views.
    pub fn builder(primary_master: V, secondary_master: V) -> SplitViewBuilder<V> {
        SplitViewBuilder {
            primary_master,
            secondary_master,
            config: LayoutConfig::default(),
            form_factor: Box::new(FixedFormFactor::pad()),
            delegate: None,
            orientation: Orientation::LandscapeLeft,
            default_state: DisplayState::Master,
        }
    }

    /// Switch the active master side.
    ///
    /// On the large-screen idiom this notifies the delegate and starts the
    /// flip animation; the reported side changes when the flip completes.
    /// On the small-screen idiom the swap is immediate. Asking for the side
    /// already shown is a no-op.
    pub fn set_side(&mut self, side: Side) -> Result<(), SplitViewError> {
        self.ensure_idle()?;
        if side == self.current_side {
            return Ok(());
        }
        match self.idiom {
            Idiom::Pad => {
                if let Some(delegate) = self.delegate.as_deref_mut() {
                    delegate.will_flip_to_side(side);
                }
                debug!(from = %self.current_side, to = %side, "master flip starting");
                self.begin(
                    TransitionKind::Flip {
                        from: self.current_side,
                        to: side,
                    },
                    self.config.flip_duration(),
                );
            }
            Idiom::Phone => {
                // Only one pane is ever on screen; no flip is played.
                self.current_side = side;
                self.relayout();
            }
        }
        Ok(())
    }

    /// Present a detail view.
    ///
    /// On the large-screen idiom the view is installed next to the master
    /// immediately and the controller shows [`DisplayState::Split`]. On the
    /// small-screen idiom the view slides in over the master; it is
    /// installed, and any previous detail view released, when the slide
    /// completes.
    pub fn push_detail(&mut self, view: V) -> Result<(), SplitViewError> {
        self.ensure_idle()?;
        match self.idiom {
            Idiom::Pad => {
                self.detail = Some(view);
                self.current_state = DisplayState::Split;
                self.relayout();
            }
            Idiom::Phone => {
                debug!(side = %self.current_side, "detail push starting");
                self.pending_detail = Some(view);
                self.begin(TransitionKind::NavPush, self.config.nav_duration());
            }
        }
        Ok(())
    }

    /// Dismiss the detail view and return to the given master side.
    ///
    /// On the small-screen idiom this plays the navigation slide back; with
    /// no detail showing it degrades to a plain side switch. On the
    /// large-screen idiom the detail view is dropped immediately and the
    /// controller lands in Master, or Split when the default state asks for
    /// a persistent split.
    pub fn pop_to_master_side(&mut self, side: Side) -> Result<(), SplitViewError> {
        self.ensure_idle()?;
        match self.idiom {
            Idiom::Phone if self.detail.is_some() => {
                debug!(to = %side, "detail pop starting");
                self.begin(TransitionKind::NavPop { to: side }, self.config.nav_duration());
            }
            Idiom::Phone => {
                self.current_side = side;
                self.relayout();
            }
            Idiom::Pad => {
                self.detail = None;
                self.current_side = side;
                self.current_state = if self.default_state == DisplayState::Split {
                    DisplayState::Split
                } else {
                    DisplayState::Master
                };
                self.relayout();
            }
        }
        Ok(())
    }

    /// Apply an interface-orientation change.
    ///
    /// The delegate is consulted first; no delegate means rotation is
    /// always approved. On approval `will_rotate` fires exactly once, the
    /// idiom is re-queried, and frames are recomputed. On denial nothing
    /// changes and `false` is returned. Rotation never alters the display
    /// state and is accepted mid-transition.
    pub fn rotate_to(&mut self, orientation: Orientation) -> bool {
        if orientation == self.orientation {
            return true;
        }
        let approved = self
            .delegate
            .as_deref_mut()
            .map_or(true, |delegate| delegate.should_rotate(orientation));
        if !approved {
            debug!(%orientation, "rotation vetoed by delegate");
            return false;
        }
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.will_rotate(orientation);
        }
        self.orientation = orientation;
        self.idiom = self.form_factor.idiom();
        if self.idiom == Idiom::Phone && self.current_state == DisplayState::Split {
            // Split never exists on the phone idiom.
            self.current_state = DisplayState::Master;
        }
        self.relayout();
        true
    }

    /// Advance the in-flight transition by `dt`, applying its state change
    /// once the full duration has elapsed. Returns the completed kind, if
    /// any. A no-op while idle.
    pub fn advance(&mut self, dt: Duration) -> Option<TransitionKind> {
        let mut transition = self.in_flight.take()?;
        transition.advance(dt);
        if transition.is_complete() {
            self.complete(transition.kind());
            Some(transition.kind())
        } else {
            self.in_flight = Some(transition);
            None
        }
    }

    /// Change the state presented when no detail navigation is active.
    /// Takes effect on future pops; the current presentation is untouched.
    pub fn set_default_state(&mut self, state: DisplayState) {
        self.default_state = state;
    }

    /// Replace the delegate.
    pub fn set_delegate(&mut self, delegate: impl SplitViewDelegate + Send + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    /// The master side currently presented.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// The display state currently presented.
    pub fn current_state(&self) -> DisplayState {
        self.current_state
    }

    /// The state presented when no detail navigation is active.
    pub fn default_state(&self) -> DisplayState {
        self.default_state
    }

    /// The interface orientation last applied.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The device idiom last queried from the provider.
    pub fn idiom(&self) -> Idiom {
        self.idiom
    }

    /// The layout and timing policy in effect.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The in-flight transition, if one is animating.
    pub fn transition(&self) -> Option<&ActiveTransition> {
        self.in_flight.as_ref()
    }

    /// Whether a transition is animating.
    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The outer container covering the layout area.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The container hosting the active master view.
    pub fn master_container(&self) -> &Container {
        &self.master_container
    }

    /// The container hosting the detail view.
    pub fn detail_container(&self) -> &Container {
        &self.detail_container
    }

    /// The primary master view.
    pub fn primary_master_view(&self) -> &V {
        &self.primary_master
    }

    /// The secondary master view.
    pub fn secondary_master_view(&self) -> &V {
        &self.secondary_master
    }

    /// The master view for a given side.
    pub fn master_view(&self, side: Side) -> &V {
        match side {
            Side::Primary => &self.primary_master,
            Side::Secondary => &self.secondary_master,
        }
    }

    /// The master view for the currently presented side.
    pub fn active_master_view(&self) -> &V {
        self.master_view(self.current_side)
    }

    /// The side the master container is actually showing right now.
    ///
    /// Equal to [`current_side`](Self::current_side) except during a flip,
    /// where the incoming side takes over halfway through the animation.
    pub fn presented_master_side(&self) -> Side {
        match self.in_flight {
            Some(transition) => match transition.kind() {
                TransitionKind::Flip { from, to } => {
                    if transition.progress() < 0.5 {
                        from
                    } else {
                        to
                    }
                }
                TransitionKind::NavPush | TransitionKind::NavPop { .. } => self.current_side,
            },
            None => self.current_side,
        }
    }

    /// The installed detail view, if any.
    pub fn detail_view(&self) -> Option<&V> {
        self.detail.as_ref()
    }

    /// The detail view waiting for a navigation push to complete, if any.
    /// Hosts draw it sliding in while the push animates.
    pub fn pending_detail_view(&self) -> Option<&V> {
        self.pending_detail.as_ref()
    }

    fn ensure_idle(&self) -> Result<(), SplitViewError> {
        match self.in_flight {
            Some(transition) => Err(SplitViewError::TransitionInFlight {
                in_flight: transition.kind(),
            }),
            None => Ok(()),
        }
    }

    fn begin(&mut self, kind: TransitionKind, duration: Duration) {
        if duration.is_zero() {
            self.complete(kind);
        } else {
            self.in_flight = Some(ActiveTransition::new(kind, duration));
        }
    }

    /// Completion continuation shared by the animated and zero-duration
    /// paths. Presented state changes only here.
    fn complete(&mut self, kind: TransitionKind) {
        match kind {
            TransitionKind::Flip { to, .. } => {
                self.current_side = to;
            }
            TransitionKind::NavPush => {
                self.detail = self.pending_detail.take();
                self.current_state = DisplayState::Detail;
            }
            TransitionKind::NavPop { to } => {
                self.detail = None;
                self.current_side = to;
                self.current_state = DisplayState::Master;
            }
        }
        debug!(%kind, side = %self.current_side, state = %self.current_state, "transition complete");
        self.relayout();
    }

    /// Recompute container frames for the current orientation, idiom, and
    /// display state.
    fn relayout(&mut self) {
        let frames = self.config.resolve(self.orientation, self.current_state);
        let radius = match self.idiom {
            Idiom::Pad => self.config.corner_radius,
            Idiom::Phone => 0.0,
        };
        self.container.place(frames.container, radius);
        match frames.master {
            Some(frame) => self.master_container.place(frame, radius),
            None => self.master_container.hide(),
        }
        match frames.detail {
            Some(frame) => self.detail_container.place(frame, radius),
            None => self.detail_container.hide(),
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for SplitViewController<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitViewController")
            .field("current_side", &self.current_side)
            .field("current_state", &self.current_state)
            .field("default_state", &self.default_state)
            .field("orientation", &self.orientation)
            .field("idiom", &self.idiom)
            .field("in_flight", &self.in_flight)
            .field("detail", &self.detail)
            .finish_non_exhaustive()
    }
}
