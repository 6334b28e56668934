//! # Article Card Component
//!
//! One story rendered as a card face: bold headline, wrapped summary, link
//! and thumbnail lines. The deck view decides where the card sits and how
//! big it is; this component only fills the given rect.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::news::Article;
use crate::tui::component::Component;

pub struct ArticleCard<'a> {
    pub article: &'a Article,
    pub focused: bool,
}

impl<'a> ArticleCard<'a> {
    pub fn new(article: &'a Article, focused: bool) -> Self {
        Self { article, focused }
    }
}

impl Component for ArticleCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (body_style, border_style, headline_color) = if self.focused {
            (
                Style::default().fg(Color::White),
                Style::default().fg(Color::Green),
                Color::White,
            )
        } else {
            // Unfocused cards sit behind the deck: dimmed all over.
            (
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                Color::Gray,
            )
        };

        let block = Block::bordered()
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner_width = area.width.saturating_sub(4).max(8) as usize;

        let mut lines: Vec<Line> = Vec::new();
        for row in textwrap::wrap(&self.article.title, inner_width) {
            lines.push(Line::from(Span::styled(
                row.into_owned(),
                Style::default()
                    .fg(headline_color)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::default());

        let description = self
            .article
            .description
            .as_deref()
            .unwrap_or("No description available.");
        for row in textwrap::wrap(description, inner_width) {
            lines.push(Line::from(Span::styled(row.into_owned(), body_style)));
        }

        if let Some(link) = &self.article.link_url {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "→ Read full article",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                truncate(link, inner_width),
                Style::default().fg(Color::Cyan),
            )));
        }

        if let Some(image) = &self.article.image_url {
            lines.push(Line::from(Span::styled(
                truncate(image, inner_width),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )));
        }

        let paragraph = Paragraph::new(lines).block(block).style(body_style);
        frame.render_widget(paragraph, area);
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 1 >= max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let cut = truncate("https://example.com/a/very/long/path", 12);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 12);
    }
}
