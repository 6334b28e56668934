//! # Shimmer Placeholder Component
//!
//! Card-shaped loading placeholder: gray rows with a highlight band that
//! sweeps left to right while a fetch is in flight. The event loop drives
//! `phase` from its animation clock (one sweep per ~1.5s).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::tui::component::Component;

const BASE: Color = Color::Rgb(70, 70, 70);
const EDGE: Color = Color::Rgb(105, 105, 105);
const BAND: Color = Color::Rgb(150, 150, 150);

/// Width of the bright band, in cells.
const BAND_WIDTH: f32 = 8.0;

pub struct ShimmerCard {
    /// Sweep position in `[0, 1)`.
    pub phase: f32,
}

impl ShimmerCard {
    pub fn new(phase: f32) -> Self {
        Self { phase }
    }

    fn shade_at(&self, column: u16, width: u16) -> Color {
        // The band travels from just left of the card to just right of it,
        // so every sweep starts and ends fully off-card.
        let travel = width as f32 + 2.0 * BAND_WIDTH;
        let center = self.phase * travel - BAND_WIDTH;
        let distance = (column as f32 - center).abs();
        if distance < BAND_WIDTH / 2.0 {
            BAND
        } else if distance < BAND_WIDTH {
            EDGE
        } else {
            BASE
        }
    }
}

impl Component for ShimmerCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let inner_width = area.width.saturating_sub(4);
        let inner_height = area.height.saturating_sub(2);

        let mut lines: Vec<Line> = Vec::with_capacity(inner_height as usize);
        for row in 0..inner_height {
            // Leave a gap between the "image" block and the two text bars,
            // echoing the card face this placeholder stands in for.
            let bar_rows = inner_height.saturating_sub(4);
            let is_gap = row == bar_rows;
            let row_width = if row == inner_height.saturating_sub(1) {
                inner_width / 2 // the last bar is shorter
            } else {
                inner_width
            };

            if is_gap {
                lines.push(Line::default());
                continue;
            }

            let spans: Vec<Span> = (0..row_width)
                .map(|column| {
                    Span::styled(
                        "▒",
                        Style::default().fg(self.shade_at(column, inner_width)),
                    )
                })
                .collect();
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
