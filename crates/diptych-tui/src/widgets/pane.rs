//! Bordered pane widget hosting a block of content.
//!
//! Border shape follows the container: rounded corners when the controller
//! reports a corner radius, square otherwise, thick when focused.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::scene::PaneContent;
use crate::theme::{BorderSet, Theme};

/// A bordered pane drawing a [`PaneContent`].
pub struct Pane<'a> {
    content: &'a PaneContent,
    focused: bool,
    rounded: bool,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    /// Create a new pane widget for the given content.
    pub fn new(content: &'a PaneContent, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            content,
            focused: false,
            rounded: false,
            theme,
            borders,
        }
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether the pane draws rounded corners.
    #[must_use]
    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }
}

impl Widget for Pane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let border_set = if self.focused {
            self.borders.focused()
        } else if self.rounded {
            self.borders.rounded()
        } else {
            self.borders.square()
        };

        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let title_style = if self.focused {
            Style::default().fg(self.theme.primary)
        } else {
            Style::default().fg(self.theme.subtext)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(border_style)
            .title(self.content.title.as_str())
            .title_style(title_style);

        let inner = block.inner(area);
        block.render(area, buf);

        // Wrap body lines to the inner width.
        let width = usize::from(inner.width);
        let mut lines = Vec::new();
        for line in &self.content.body {
            if line.is_empty() {
                lines.push(Line::raw(""));
            } else {
                for wrapped in textwrap::wrap(line, width.max(1)) {
                    lines.push(Line::raw(wrapped.into_owned()));
                }
            }
        }

        let paragraph = Paragraph::new(lines).style(Style::default().fg(self.theme.text));
        paragraph.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_builder() {
        let theme = Theme::default();
        let borders = BorderSet::new(false);
        let content = PaneContent::new("Test Pane", vec!["Hello, world!".into()]);

        let pane = Pane::new(&content, &theme, &borders).focused(true).rounded(true);
        assert!(pane.focused);
        assert!(pane.rounded);
        assert_eq!(pane.content.title, "Test Pane");
    }

    #[test]
    fn test_pane_renders_title_and_body() {
        let theme = Theme::default();
        let borders = BorderSet::new(false);
        let content = PaneContent::new("Library", vec!["first line".into()]);

        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        Pane::new(&content, &theme, &borders).render(area, &mut buf);

        let rendered: String = (0..area.height)
            .flat_map(|y| {
                (0..area.width).map(move |x| (x, y))
            })
            .filter_map(|(x, y)| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(rendered.contains("Library"));
        assert!(rendered.contains("first line"));
    }

    #[test]
    fn test_pane_skips_degenerate_areas() {
        let theme = Theme::default();
        let borders = BorderSet::new(false);
        let content = PaneContent::new("X", vec![]);

        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        // Must not panic on areas too small for a border.
        Pane::new(&content, &theme, &borders).render(area, &mut buf);
    }
}
