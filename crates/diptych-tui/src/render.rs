//! Rendering for the diptych TUI.
//!
//! The stage between the status bar and the footer is a viewport onto the
//! controller's logical coordinate space: container frames are projected
//! from layout units to terminal cells, so the proportions of the split
//! survive any terminal size. While a transition is in flight the stage
//! draws intermediate geometry from the controller's reported progress.

use diptych_core::{Rect as LogicalRect, Side, Size, TransitionKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::scene::PaneContent;
use crate::widgets::{FooterHints, Pane, StatusBar, StatusBarContent};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 10;

/// Render the whole TUI.
pub fn render_app(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Check for minimum size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, app);
        return;
    }

    // Divide into: StatusBar | Stage | FooterHints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(0),    // Stage (expands)
            Constraint::Length(1), // Footer hints
        ])
        .split(area);

    let status = status_content(app);
    frame.render_widget(StatusBar::new(&status, &app.theme), chunks[0]);

    render_stage(frame, chunks[1], app);

    let hints = FooterHints::hints_for_idiom(app.controller.idiom());
    let mut footer = FooterHints::new(&hints, &app.theme);
    if let Some(event) = app.events.back() {
        footer = footer.label(event);
    }
    frame.render_widget(footer, chunks[2]);

    if app.show_help {
        render_help_overlay(frame, area, app);
    }
}

/// Build the status bar content from the app state.
pub(crate) fn status_content(app: &App) -> StatusBarContent {
    let controller = &app.controller;
    StatusBarContent {
        side: controller.current_side(),
        state: controller.current_state(),
        idiom: controller.idiom(),
        orientation: controller.orientation(),
        transition: controller.transition().map(|t| (t.kind(), t.progress())),
        rotation_locked: app.rotation_locked(),
        notice: app.notification.clone(),
    }
}

/// Render the split-view stage.
fn render_stage(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let controller = &app.controller;
    match controller.transition().map(|t| (t.kind(), t.progress())) {
        Some((TransitionKind::Flip { .. }, progress)) => {
            render_detail(frame, area, app, false);
            render_flip(frame, area, app, progress);
        }
        Some((TransitionKind::NavPush, progress)) => {
            render_master(frame, area, app, controller.current_side(), false);
            render_incoming_detail(frame, area, app, progress);
        }
        Some((TransitionKind::NavPop { to }, progress)) => {
            render_master(frame, area, app, to, true);
            render_outgoing_detail(frame, area, app, progress);
        }
        None => {
            let state = controller.current_state();
            if state.shows_master() {
                render_master(frame, area, app, controller.current_side(), true);
            }
            if state.shows_detail() {
                render_detail(frame, area, app, !state.shows_master());
            }
        }
    }
}

/// Render the master pane for `side` at the master container's frame.
fn render_master(frame: &mut Frame<'_>, area: Rect, app: &App, side: Side, focused: bool) {
    let controller = &app.controller;
    let container = controller.master_container();
    let cell = project(container.frame(), logical_area(app), area);
    let pane = Pane::new(controller.master_view(side), &app.theme, &app.borders)
        .focused(focused)
        .rounded(container.corner_radius() > 0.0);
    frame.render_widget(pane, cell);
}

/// Render the detail pane, or a placeholder when nothing has been pushed.
fn render_detail(frame: &mut Frame<'_>, area: Rect, app: &App, focused: bool) {
    let controller = &app.controller;
    let container = controller.detail_container();
    if !container.is_visible() {
        return;
    }

    let placeholder;
    let content = match controller.detail_view() {
        Some(view) => view,
        None => {
            placeholder = PaneContent::detail_placeholder();
            &placeholder
        }
    };

    let cell = project(container.frame(), logical_area(app), area);
    let pane = Pane::new(content, &app.theme, &app.borders)
        .focused(focused)
        .rounded(container.corner_radius() > 0.0);
    frame.render_widget(pane, cell);
}

/// Render a master flip: the outgoing side shrinks to a sliver over the
/// first half, then the incoming side grows back over the second half. The
/// controller reports which side is presented on either half.
fn render_flip(frame: &mut Frame<'_>, area: Rect, app: &App, progress: f32) {
    let controller = &app.controller;
    let container = controller.master_container();
    if !container.is_visible() {
        return;
    }

    let cell = project(container.frame(), logical_area(app), area);
    let side = controller.presented_master_side();
    let factor = if progress < 0.5 {
        1.0 - 2.0 * progress
    } else {
        2.0 * progress - 1.0
    };

    let squeezed = squeeze(cell, factor);
    if squeezed.width < 2 {
        return;
    }

    let pane = Pane::new(controller.master_view(side), &app.theme, &app.borders)
        .focused(true)
        .rounded(container.corner_radius() > 0.0);
    frame.render_widget(pane, squeezed);
}

/// Render the pending detail sliding in from the right edge.
fn render_incoming_detail(frame: &mut Frame<'_>, area: Rect, app: &App, progress: f32) {
    let Some(view) = app.controller.pending_detail_view() else {
        return;
    };

    let offset = slide_offset(area.width, progress);
    let cell = Rect::new(area.x + offset, area.y, area.width - offset, area.height);
    let container = app.controller.detail_container();
    let pane = Pane::new(view, &app.theme, &app.borders)
        .focused(true)
        .rounded(container.corner_radius() > 0.0);
    frame.render_widget(pane, cell);
}

/// Render the current detail sliding out to the right edge.
fn render_outgoing_detail(frame: &mut Frame<'_>, area: Rect, app: &App, progress: f32) {
    let Some(view) = app.controller.detail_view() else {
        return;
    };

    let offset = slide_offset(area.width, 1.0 - progress);
    let cell = Rect::new(area.x + offset, area.y, area.width - offset, area.height);
    let container = app.controller.detail_container();
    let pane = Pane::new(view, &app.theme, &app.borders)
        .focused(false)
        .rounded(container.corner_radius() > 0.0);
    frame.render_widget(pane, cell);
}

/// Render "terminal too small" warning.
fn render_too_small(frame: &mut Frame<'_>, app: &App) {
    let status = StatusBarContent::too_small();
    frame.render_widget(StatusBar::new(&status, &app.theme), frame.area());
}

/// Render the help overlay.
fn render_help_overlay(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let help_text = r"
  Split view
    Tab               Flip master side
    1 / 2             Primary / secondary master
    Enter             Push a detail item
    Esc               Pop back to master
    r                 Rotate device
    l                 Toggle rotation lock
    m                 Cycle default state
    q                 Quit
    ?                 Toggle this help

  [Press any key to close]
";

    let width = 54.min(area.width.saturating_sub(4));
    let height = 15.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    // Clear the area
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focused))
        .style(Style::default().fg(app.theme.text).bg(app.theme.surface));

    frame.render_widget(Paragraph::new(help_text).block(block), overlay_area);
}

/// The logical size the current orientation resolves against.
fn logical_area(app: &App) -> Size {
    app.controller.config().area(app.controller.orientation())
}

/// Create a centered rect with fixed dimensions.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Project one axis of a logical frame onto cell coordinates.
///
/// Both endpoints are floor-divided so adjacent logical spans stay
/// adjacent in cells. Results never exceed `cells`, so the narrowing
/// casts hold.
#[allow(clippy::cast_possible_truncation)]
fn scale_span(start: u16, extent: u16, logical: u16, cells: u16) -> (u16, u16) {
    if logical == 0 {
        return (0, 0);
    }
    let lo = u32::from(start) * u32::from(cells) / u32::from(logical);
    let hi = (u32::from(start) + u32::from(extent)) * u32::from(cells) / u32::from(logical);
    (lo as u16, (hi - lo) as u16)
}

/// Project a logical frame into the stage area.
fn project(frame: LogicalRect, logical: Size, stage: Rect) -> Rect {
    let (x, width) = scale_span(frame.x, frame.width, logical.width, stage.width);
    let (y, height) = scale_span(frame.y, frame.height, logical.height, stage.height);
    Rect::new(stage.x + x, stage.y + y, width, height)
}

/// Shrink `area` horizontally about its center. `factor` is clamped to
/// `[0, 1]`, so the result never exceeds the input width.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn squeeze(area: Rect, factor: f32) -> Rect {
    let width = (f32::from(area.width) * factor.clamp(0.0, 1.0)).round() as u16;
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Horizontal offset of a pane that has slid `progress` of the way across
/// `width` cells.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn slide_offset(width: u16, progress: f32) -> u16 {
    (f32::from(width) * (1.0 - progress.clamp(0.0, 1.0))).round() as u16
}
