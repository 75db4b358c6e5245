//! diptych-tui: Terminal host for the diptych split-view controller
//!
//! This crate provides the interactive layer for diptych, including:
//! - A demo scene with two master panes and pushable detail items
//! - Widgets for the status bar, panes, and key hints
//! - Animated rendering of flip and navigation transitions
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod render;
pub mod scene;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
mod widgets;

pub use app::{App, DemoOptions};
pub use diptych_core;
pub use event::{Action, Event, EventHandler};
pub use scene::PaneContent;

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(options: DemoOptions) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(options)?;

    // Create event handler (20 Hz tick rate = 50ms, smooth enough for the
    // transition animations)
    let mut events = EventHandler::new(50);

    // Main loop
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Draw
        terminal.draw(|frame| render::render_app(frame, app))?;

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    let action = event::key_to_action(key);
                    app.handle_action(action);
                }
                Event::Tick => {
                    app.tick();
                }
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the version of the TUI crate.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod snapshot_tests {
    use crate::app::DemoOptions;
    use crate::event::Action;
    use crate::test_utils::{
        create_test_app, create_test_app_with, create_test_phone_app, layout_summary,
    };
    use diptych_core::{DisplayState, LayoutConfig};
    use insta::assert_snapshot;

    // ========================================================================
    // Layout Snapshot Tests
    // ========================================================================

    #[test]
    fn test_snapshot_pad_master_layout() {
        let app = create_test_app();
        assert_snapshot!(layout_summary(&app), @r"
side=primary state=master idiom=pad orientation=landscape-left
container=(0,0 1024x748) radius=5 visible=true
master=(0,0 1024x748) radius=5 visible=true
detail=(0,0 0x0) radius=0 visible=false
");
    }

    #[test]
    fn test_snapshot_pad_split_layout() {
        let app = create_test_app_with(DemoOptions {
            default_state: DisplayState::Split,
            layout: LayoutConfig::instant(),
            ..DemoOptions::default()
        });
        assert_snapshot!(layout_summary(&app), @r"
side=primary state=split idiom=pad orientation=landscape-left
container=(0,0 1024x748) radius=5 visible=true
master=(0,0 341x748) radius=5 visible=true
detail=(342,0 682x748) radius=5 visible=true
");
    }

    #[test]
    fn test_snapshot_phone_clamps_to_master() {
        let app = create_test_phone_app();
        assert_snapshot!(layout_summary(&app), @r"
side=primary state=master idiom=phone orientation=landscape-left
container=(0,0 1024x748) radius=0 visible=true
master=(0,0 1024x748) radius=0 visible=true
detail=(0,0 0x0) radius=0 visible=false
");
    }

    #[test]
    fn test_snapshot_pad_portrait_layout() {
        let mut app = create_test_app();
        app.handle_action(Action::Rotate);
        assert_snapshot!(layout_summary(&app), @r"
side=primary state=master idiom=pad orientation=portrait
container=(0,0 748x1024) radius=5 visible=true
master=(0,0 748x1024) radius=5 visible=true
detail=(0,0 0x0) radius=0 visible=false
");
    }
}
