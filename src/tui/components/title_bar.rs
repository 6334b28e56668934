//! # TitleBar Component
//!
//! Top status bar showing the app name, the active section, a "Live news"
//! badge while a fetch is running, and the last successful update time.
//!
//! Purely presentational: all fields are props from the parent, no internal
//! state, so it renders the same line for the same inputs every time.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    /// Active section label (e.g. "Technology")
    pub category: String,
    /// Transient status (e.g. "Loading Technology...")
    pub status_message: String,
    /// Whether a fetch is currently in flight
    pub is_loading: bool,
    /// Stamp of the last successful load
    pub last_updated: Option<DateTime<Local>>,
}

impl TitleBar {
    pub fn new(
        category: String,
        status_message: String,
        is_loading: bool,
        last_updated: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            category,
            status_message,
            is_loading,
            last_updated,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "newsdeck",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(self.category.clone(), Style::default().fg(Color::Cyan)),
        ];

        if self.is_loading {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                "Live news",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if let Some(stamp) = self.last_updated {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                format!("Updated {}", stamp.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Gray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
