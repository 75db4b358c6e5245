//! Status bar widget for the top of the TUI.
//!
//! Format: `● primary │ split │ pad │ landscape-left │ flip 42% │ → note`

use diptych_core::{DisplayState, Idiom, Orientation, Side, TransitionKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Status bar content.
#[derive(Debug, Clone, Default)]
pub struct StatusBarContent {
    /// Master side currently presented.
    pub side: Side,
    /// Display state currently presented.
    pub state: DisplayState,
    /// Device idiom being simulated.
    pub idiom: Idiom,
    /// Interface orientation.
    pub orientation: Orientation,
    /// In-flight transition and its progress, if animating.
    pub transition: Option<(TransitionKind, f32)>,
    /// Whether the delegate is vetoing rotations.
    pub rotation_locked: bool,
    /// Transient notice (errors, confirmations).
    pub notice: Option<String>,
}

impl StatusBarContent {
    /// Create a "terminal too small" warning.
    pub fn too_small() -> Self {
        Self {
            notice: Some("Terminal too small; resize to at least 40x10".into()),
            ..Self::default()
        }
    }
}

/// Status bar widget.
pub struct StatusBar<'a> {
    content: &'a StatusBarContent,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget.
    pub fn new(content: &'a StatusBarContent, theme: &'a Theme) -> Self {
        Self { content, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sep = || Span::styled(" │ ", Style::default().fg(self.theme.muted));

        let mut spans = vec![
            Span::styled("● ", Style::default().fg(self.theme.primary)),
            Span::styled(
                self.content.side.to_string(),
                Style::default().fg(self.theme.text),
            ),
            sep(),
            Span::styled(
                self.content.state.to_string(),
                Style::default().fg(self.theme.subtext),
            ),
            sep(),
            Span::styled(
                self.content.idiom.to_string(),
                Style::default().fg(self.theme.subtext),
            ),
            sep(),
            Span::styled(
                self.content.orientation.to_string(),
                Style::default().fg(self.theme.subtext),
            ),
        ];

        if let Some((kind, progress)) = self.content.transition {
            spans.push(sep());
            spans.push(Span::styled(
                format!("{kind} {:.0}%", progress * 100.0),
                Style::default().fg(self.theme.info),
            ));
        }

        if self.content.rotation_locked {
            spans.push(sep());
            spans.push(Span::styled(
                "rotation locked",
                Style::default().fg(self.theme.warning),
            ));
        }

        if let Some(ref notice) = self.content.notice {
            spans.push(sep());
            spans.push(Span::styled(
                format!("→ {notice}"),
                Style::default().fg(self.theme.secondary),
            ));
        }

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}
