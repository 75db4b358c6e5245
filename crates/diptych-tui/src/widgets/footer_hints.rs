//! Footer keybinding hints.
//!
//! Format: `side now secondary            [Tab] flip │ [?] help │ [q] quit`

use diptych_core::Idiom;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Esc").
    pub key: String,
    /// The action description (e.g., "flip", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer hints widget with an optional left-side label.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    label: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            label: None,
        }
    }

    /// Set a label shown on the left side.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// The hint set for the demo, adjusted for the idiom's vocabulary.
    pub fn hints_for_idiom(idiom: Idiom) -> Vec<KeyHint> {
        let side_hint = match idiom {
            Idiom::Pad => KeyHint::new("Tab", "flip"),
            Idiom::Phone => KeyHint::new("Tab", "switch"),
        };
        vec![
            side_hint,
            KeyHint::new("Enter", "detail"),
            KeyHint::new("Esc", "pop"),
            KeyHint::new("r", "rotate"),
            KeyHint::new("l", "lock"),
            KeyHint::new("m", "default"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(label) = self.label {
            left_spans.push(Span::styled(label, Style::default().fg(self.theme.subtext)));
        }

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                &hint.key,
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                &hint.action,
                Style::default().fg(self.theme.subtext),
            ));
        }

        // Right-align the hints against the label.
        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        let line = Line::from(left_spans);
        let paragraph = Paragraph::new(line).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_hint_creation() {
        let hint = KeyHint::new("Tab", "flip");
        assert_eq!(hint.key, "Tab");
        assert_eq!(hint.action, "flip");
    }

    #[test]
    fn test_hints_for_pad_use_flip_vocabulary() {
        let hints = FooterHints::hints_for_idiom(Idiom::Pad);
        assert!(hints.iter().any(|h| h.key == "Tab" && h.action == "flip"));
        assert!(hints.iter().any(|h| h.key == "q" && h.action == "quit"));
    }

    #[test]
    fn test_hints_for_phone_use_switch_vocabulary() {
        let hints = FooterHints::hints_for_idiom(Idiom::Phone);
        assert!(hints.iter().any(|h| h.key == "Tab" && h.action == "switch"));
        assert!(hints.iter().any(|h| h.key == "Esc" && h.action == "pop"));
    }

    #[test]
    fn test_hints_right_align_within_area() {
        let theme = Theme::default();
        let hints = vec![KeyHint::new("q", "quit")];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme).label("pad").render(area, &mut buf);

        let text: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(text.starts_with("pad"));
        assert!(text.trim_end().ends_with("[q] quit"));
    }
}
