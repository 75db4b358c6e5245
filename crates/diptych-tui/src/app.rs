//! Application state for the diptych TUI.
//!
//! `App` wraps a [`SplitViewController`] with demo content, translates key
//! actions into controller operations, drives animations from the tick
//! clock, and keeps a bounded log of delegate and transition events.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use diptych_core::{
    DisplayState, FixedFormFactor, Idiom, LayoutConfig, Orientation, Side, SplitViewController,
    SplitViewDelegate, SplitViewError, TransitionKind,
};
use tokio::sync::mpsc;

use crate::event::Action;
use crate::scene::PaneContent;
use crate::theme::{BorderSet, Theme};

const MAX_EVENTS: usize = 100;
/// Notification lifetime in ticks (3 s at the 50 ms tick rate).
const NOTIFICATION_TICKS: usize = 60;

/// Delegate notifications forwarded onto the app's event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateEvent {
    /// An approved rotation is about to be applied.
    WillRotate(Orientation),
    /// A master flip is about to start.
    WillFlip(Side),
}

/// Delegate wired to the app: vetoes rotation while the lock is set and
/// forwards notifications over a channel for the event log.
struct ChannelDelegate {
    locked: Arc<AtomicBool>,
    events: mpsc::UnboundedSender<DelegateEvent>,
}

impl SplitViewDelegate for ChannelDelegate {
    fn should_rotate(&mut self, _orientation: Orientation) -> bool {
        !self.locked.load(Ordering::Relaxed)
    }

    fn will_rotate(&mut self, orientation: Orientation) {
        let _ = self.events.send(DelegateEvent::WillRotate(orientation));
    }

    fn will_flip_to_side(&mut self, side: Side) {
        let _ = self.events.send(DelegateEvent::WillFlip(side));
    }
}

/// Options the host passes when launching the demo.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Device idiom to simulate.
    pub idiom: Idiom,
    /// Initial interface orientation.
    pub orientation: Orientation,
    /// Default display state for the large-screen idiom.
    pub default_state: DisplayState,
    /// Layout geometry and timing.
    pub layout: LayoutConfig,
    /// ASCII-safe borders and a high-contrast palette.
    pub ascii: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            idiom: Idiom::Pad,
            orientation: Orientation::LandscapeLeft,
            default_state: DisplayState::Master,
            layout: LayoutConfig::default(),
            ascii: false,
        }
    }
}

/// Application state.
pub struct App {
    /// The split-view controller under demonstration.
    pub controller: SplitViewController<PaneContent>,

    /// Whether the TUI should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Event log messages (bounded to `MAX_EVENTS`).
    pub events: VecDeque<String>,

    /// Transient notification shown in the status bar.
    pub notification: Option<String>,

    /// Ticks remaining until the notification is cleared.
    notification_ttl: usize,

    /// Color palette.
    pub theme: Theme,

    /// Border character set.
    pub borders: BorderSet,

    /// Shared with the delegate; set to veto rotations.
    rotation_locked: Arc<AtomicBool>,

    /// Delegate notifications drained on each tick.
    delegate_rx: mpsc::UnboundedReceiver<DelegateEvent>,

    /// Number of detail views pushed so far.
    detail_sequence: usize,

    /// Clock reading at the previous tick.
    last_tick: Instant,
}

impl App {
    /// Create the app and its controller from demo options.
    pub fn new(options: DemoOptions) -> Result<Self, SplitViewError> {
        let rotation_locked = Arc::new(AtomicBool::new(false));
        let (delegate_tx, delegate_rx) = mpsc::unbounded_channel();
        let delegate = ChannelDelegate {
            locked: Arc::clone(&rotation_locked),
            events: delegate_tx,
        };

        let controller = SplitViewController::builder(
            PaneContent::primary_master(),
            PaneContent::secondary_master(),
        )
        .form_factor(FixedFormFactor::from(options.idiom))
        .orientation(options.orientation)
        .default_state(options.default_state)
        .layout(options.layout)
        .delegate(delegate)
        .build()?;

        let (theme, borders) = if options.ascii {
            (Theme::high_contrast(), BorderSet::new(true))
        } else {
            (Theme::default(), BorderSet::new(false))
        };

        Ok(Self {
            controller,
            should_quit: false,
            show_help: false,
            events: VecDeque::new(),
            notification: None,
            notification_ttl: 0,
            theme,
            borders,
            rotation_locked,
            delegate_rx,
            detail_sequence: 0,
            last_tick: Instant::now(),
        })
    }

    /// Whether the delegate is currently vetoing rotations.
    pub fn rotation_locked(&self) -> bool {
        self.rotation_locked.load(Ordering::Relaxed)
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        // Global actions
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::FlipSide => {
                let side = self.controller.current_side().opposite();
                self.request_side(side);
            }
            Action::SidePrimary => self.request_side(Side::Primary),
            Action::SideSecondary => self.request_side(Side::Secondary),
            Action::PushDetail => {
                let view = PaneContent::detail(
                    self.detail_sequence + 1,
                    self.controller.current_side(),
                );
                match self.controller.push_detail(view) {
                    Ok(()) => {
                        self.detail_sequence += 1;
                        if !self.controller.is_transitioning() {
                            self.push_event(format!("item {} installed", self.detail_sequence));
                        }
                    }
                    Err(e) => self.set_notification(format!("Ignored: {e}")),
                }
            }
            Action::Pop => {
                let side = self.controller.current_side();
                let had_detail = self.controller.detail_view().is_some();
                match self.controller.pop_to_master_side(side) {
                    Ok(()) => {
                        if !self.controller.is_transitioning() && had_detail {
                            self.push_event("detail dismissed".to_string());
                        }
                    }
                    Err(e) => self.set_notification(format!("Ignored: {e}")),
                }
            }
            Action::Rotate => {
                let next = if self.controller.orientation().is_landscape() {
                    Orientation::Portrait
                } else {
                    Orientation::LandscapeLeft
                };
                if !self.controller.rotate_to(next) {
                    self.set_notification("Rotation vetoed by delegate".to_string());
                }
            }
            Action::ToggleLock => {
                let locked = !self.rotation_locked.load(Ordering::Relaxed);
                self.rotation_locked.store(locked, Ordering::Relaxed);
                let message = if locked {
                    "Rotation lock on"
                } else {
                    "Rotation lock off"
                };
                self.set_notification(message.to_string());
            }
            Action::CycleDefault => {
                let next = match self.controller.default_state() {
                    DisplayState::Master => DisplayState::Detail,
                    DisplayState::Detail => DisplayState::Split,
                    DisplayState::Split => DisplayState::Master,
                };
                self.controller.set_default_state(next);
                self.set_notification(format!("Default state: {next}"));
            }
            Action::Quit | Action::Help | Action::None => {}
        }
    }

    /// Advance time-based state: the controller's transition, delegate
    /// events, and the notification TTL.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;

        if let Some(kind) = self.controller.advance(dt) {
            let message = match kind {
                TransitionKind::Flip { to, .. } => format!("flip finished; side now {to}"),
                TransitionKind::NavPush => format!("item {} pushed", self.detail_sequence),
                TransitionKind::NavPop { to } => format!("popped to {to} master"),
            };
            self.push_event(message);
        }

        while let Ok(event) = self.delegate_rx.try_recv() {
            match event {
                DelegateEvent::WillRotate(orientation) => {
                    self.push_event(format!("will rotate to {orientation}"));
                }
                DelegateEvent::WillFlip(side) => {
                    self.push_event(format!("will flip to {side}"));
                }
            }
        }

        // Clear notification after TTL expires
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    fn request_side(&mut self, side: Side) {
        let before = self.controller.current_side();
        match self.controller.set_side(side) {
            Ok(()) => {
                let after = self.controller.current_side();
                if !self.controller.is_transitioning() && after != before {
                    self.push_event(format!("side now {after}"));
                }
            }
            Err(e) => self.set_notification(format!("Ignored: {e}")),
        }
    }

    /// Set a temporary notification message.
    fn set_notification(&mut self, msg: String) {
        self.notification = Some(msg);
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    fn push_event(&mut self, event: String) {
        if self.events.len() >= MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_options(idiom: Idiom) -> DemoOptions {
        DemoOptions {
            idiom,
            layout: LayoutConfig::instant(),
            ..DemoOptions::default()
        }
    }

    fn animated_options(idiom: Idiom) -> DemoOptions {
        DemoOptions {
            idiom,
            ..DemoOptions::default()
        }
    }

    #[test]
    fn test_flip_action_changes_side() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::FlipSide);
        assert_eq!(app.controller.current_side(), Side::Secondary);
        app.handle_action(Action::SidePrimary);
        assert_eq!(app.controller.current_side(), Side::Primary);
    }

    #[test]
    fn test_push_and_pop_actions() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::PushDetail);
        assert_eq!(app.controller.current_state(), DisplayState::Split);
        assert_eq!(
            app.controller.detail_view().map(|d| d.title.as_str()),
            Some("Item 1")
        );

        app.handle_action(Action::Pop);
        assert_eq!(app.controller.current_state(), DisplayState::Master);
        assert!(app.controller.detail_view().is_none());
    }

    #[test]
    fn test_detail_sequence_numbers_grow() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::PushDetail);
        app.handle_action(Action::PushDetail);
        assert_eq!(
            app.controller.detail_view().map(|d| d.title.as_str()),
            Some("Item 2")
        );
    }

    #[test]
    fn test_busy_request_sets_notification() {
        let mut app = App::new(animated_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::FlipSide);
        assert!(app.controller.is_transitioning());

        app.handle_action(Action::PushDetail);
        let notification = app.notification.as_deref().unwrap();
        assert!(notification.starts_with("Ignored:"));
        assert!(notification.contains("flip"));
    }

    #[test]
    fn test_quit_closes_help_first() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        app.handle_action(Action::Quit);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::Help);
        app.handle_action(Action::FlipSide);
        assert!(!app.show_help);
        // The action that closed help did not run.
        assert_eq!(app.controller.current_side(), Side::Primary);
    }

    #[test]
    fn test_lock_blocks_rotation() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::ToggleLock);
        assert!(app.rotation_locked());

        app.handle_action(Action::Rotate);
        assert_eq!(app.controller.orientation(), Orientation::LandscapeLeft);
        assert_eq!(
            app.notification.as_deref(),
            Some("Rotation vetoed by delegate")
        );

        app.handle_action(Action::ToggleLock);
        app.handle_action(Action::Rotate);
        assert_eq!(app.controller.orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_cycle_default_state() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::CycleDefault);
        assert_eq!(app.controller.default_state(), DisplayState::Detail);
        app.handle_action(Action::CycleDefault);
        assert_eq!(app.controller.default_state(), DisplayState::Split);
        app.handle_action(Action::CycleDefault);
        assert_eq!(app.controller.default_state(), DisplayState::Master);
    }

    #[test]
    fn test_tick_logs_delegate_events() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::FlipSide);
        app.tick();
        assert!(app
            .events
            .iter()
            .any(|e| e == "will flip to secondary"));
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let mut app = App::new(instant_options(Idiom::Pad)).unwrap();
        app.handle_action(Action::ToggleLock);
        assert!(app.notification.is_some());

        for _ in 0..NOTIFICATION_TICKS {
            app.tick();
        }
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_phone_push_action_starts_navigation() {
        let mut app = App::new(animated_options(Idiom::Phone)).unwrap();
        app.handle_action(Action::PushDetail);
        assert!(app.controller.is_transitioning());
        assert_eq!(app.controller.current_state(), DisplayState::Master);

        app.controller.advance(std::time::Duration::from_millis(300));
        assert_eq!(app.controller.current_state(), DisplayState::Detail);
    }
}
