//! # Deck View Component
//!
//! Lays the loaded cards out as a stack: the focused card front and center,
//! neighbors peeking in from the edges, scaled down and dimmed.
//!
//! The pure transform (`core::deck::transform_for`) speaks in gesture units;
//! this component converts those to cell geometry. Rotation has no cell-grid
//! analogue, so tilted cards are conveyed by offset and dimming alone.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::deck::{CardTransform, transform_for};
use crate::news::Article;
use crate::tui::UNITS_PER_CELL;
use crate::tui::component::Component;
use crate::tui::components::card::ArticleCard;

/// Neighbors beyond this distance land fully outside any sane terminal.
const VISIBLE_NEIGHBORS: usize = 2;

pub struct DeckView<'a> {
    articles: &'a [Article],
    focus: usize,
}

impl<'a> DeckView<'a> {
    pub fn new(articles: &'a [Article], focus: usize) -> Self {
        Self { articles, focus }
    }
}

impl Component for DeckView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.articles.is_empty() || area.width < 12 || area.height < 6 {
            return;
        }

        let base_width = (area.width as f32 * 0.66) as u16;
        let base_height = area.height.saturating_sub(2);

        let first = self.focus.saturating_sub(VISIBLE_NEIGHBORS);
        let last = (self.focus + VISIBLE_NEIGHBORS).min(self.articles.len() - 1);

        // Unfocused cards first, the focused card painted last on top.
        let mut order: Vec<usize> = (first..=last).collect();
        order.sort_by_key(|&index| transform_for(index, self.focus).stack_order);

        for index in order {
            let transform = transform_for(index, self.focus);
            if let Some(rect) = card_rect(&transform, area, base_width, base_height) {
                ArticleCard::new(&self.articles[index], index == self.focus)
                    .render(frame, rect);
            }
        }
    }
}

/// Maps a transform to an on-screen rect, clipped to `area`.
/// Returns None when too little of the card remains visible to draw.
fn card_rect(
    transform: &CardTransform,
    area: Rect,
    base_width: u16,
    base_height: u16,
) -> Option<Rect> {
    let width = (base_width as f32 * transform.scale).round() as i32;
    let height = (base_height as f32 * transform.scale).round() as i32;

    let center_x = area.x as f32 + area.width as f32 / 2.0 + transform.x_offset / UNITS_PER_CELL;
    let top_y = area.y as f32
        + (area.height.saturating_sub(base_height) as f32) / 2.0
        + transform.y_offset / UNITS_PER_CELL;

    let mut left = (center_x - width as f32 / 2.0).round() as i32;
    let mut right = left + width;
    let top = (top_y.round() as i32).max(area.y as i32);
    let bottom = (top + height).min(area.bottom() as i32);

    left = left.max(area.x as i32);
    right = right.min(area.right() as i32);

    let visible_width = right - left;
    let visible_height = bottom - top;
    if visible_width < 8 || visible_height < 4 {
        return None;
    }

    Some(Rect::new(
        left as u16,
        top as u16,
        visible_width as u16,
        visible_height as u16,
    ))
}
