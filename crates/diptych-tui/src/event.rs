//! Event handling for the diptych TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A tick event for animation and UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                // Poll for events with timeout
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else {
                    // No event, send tick
                    if tx_clone.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    /// Flip to the opposite master side.
    FlipSide,
    /// Show the primary master side.
    SidePrimary,
    /// Show the secondary master side.
    SideSecondary,
    /// Push a fresh detail view.
    PushDetail,
    /// Pop back to the current master side.
    Pop,
    /// Toggle between landscape and portrait.
    Rotate,
    /// Toggle the delegate's rotation veto.
    ToggleLock,
    /// Cycle the default display state.
    CycleDefault,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Tab | KeyCode::Char('f') => Action::FlipSide,
        KeyCode::Char('1') => Action::SidePrimary,
        KeyCode::Char('2') => Action::SideSecondary,
        KeyCode::Enter | KeyCode::Char('d') => Action::PushDetail,
        KeyCode::Esc | KeyCode::Backspace => Action::Pop,
        KeyCode::Char('r') => Action::Rotate,
        KeyCode::Char('l') => Action::ToggleLock,
        KeyCode::Char('m') => Action::CycleDefault,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(key_to_action(event), Action::Quit);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_to_action(key(KeyCode::Tab)), Action::FlipSide);
        assert_eq!(key_to_action(key(KeyCode::Char('f'))), Action::FlipSide);
        assert_eq!(key_to_action(key(KeyCode::Char('1'))), Action::SidePrimary);
        assert_eq!(key_to_action(key(KeyCode::Char('2'))), Action::SideSecondary);
        assert_eq!(key_to_action(key(KeyCode::Enter)), Action::PushDetail);
        assert_eq!(key_to_action(key(KeyCode::Esc)), Action::Pop);
        assert_eq!(key_to_action(key(KeyCode::Char('r'))), Action::Rotate);
        assert_eq!(key_to_action(key(KeyCode::Char('x'))), Action::None);
    }
}
