//! Test utilities for diptych-tui snapshot and integration testing.
//!
//! This module provides helper functions for creating test terminals,
//! rendering the app, and converting buffers to strings for snapshot
//! testing.

use crate::app::{App, DemoOptions};
use crate::render;
use diptych_core::{Container, Idiom, LayoutConfig};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT)
}

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a pad-idiom test app with instant transitions.
pub fn create_test_app() -> App {
    create_test_app_with(DemoOptions {
        layout: LayoutConfig::instant(),
        ..DemoOptions::default()
    })
}

/// Create a phone-idiom test app with instant transitions.
pub fn create_test_phone_app() -> App {
    create_test_app_with(DemoOptions {
        idiom: Idiom::Phone,
        layout: LayoutConfig::instant(),
        ..DemoOptions::default()
    })
}

/// Create a test app from explicit options.
pub fn create_test_app_with(options: DemoOptions) -> App {
    App::new(options).expect("Failed to create test app")
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// This produces a simple text representation of the buffer content,
/// suitable for snapshot comparison.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the app to a default-sized buffer and return it as a string.
pub fn render_app_to_string(app: &App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the app to a buffer with custom dimensions and return it as a string.
pub fn render_app_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|frame| render::render_app(frame, app))
        .expect("Failed to render app");
    buffer_to_string(terminal.backend().buffer())
}

/// Deterministic one-line-per-container summary of the controller's
/// presentation, suitable for snapshot comparison.
pub fn layout_summary(app: &App) -> String {
    let controller = &app.controller;
    let mut out = format!(
        "side={} state={} idiom={} orientation={}\n",
        controller.current_side(),
        controller.current_state(),
        controller.idiom(),
        controller.orientation()
    );
    out.push_str(&describe("container", controller.container()));
    out.push_str(&describe("master", controller.master_container()));
    out.push_str(&describe("detail", controller.detail_container()));
    out.pop();
    out
}

fn describe(name: &str, container: &Container) -> String {
    let frame = container.frame();
    format!(
        "{name}=({},{} {}x{}) radius={} visible={}\n",
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        container.corner_radius(),
        container.is_visible()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert!(app.controller.idiom().is_pad());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = ratatui::layout::Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hello"));
        assert!(result.contains("World"));
    }

    #[test]
    fn test_layout_summary_shape() {
        let app = create_test_app();
        let summary = layout_summary(&app);
        assert!(summary.starts_with("side=primary state=master"));
        assert_eq!(summary.lines().count(), 4);
    }
}
