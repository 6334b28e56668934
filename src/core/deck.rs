//! # Deck Navigation
//!
//! Tracks which card is focused and derives per-card transforms. This module
//! is pure: no I/O, no terminal types. The TUI maps [`CardTransform`] values
//! onto cell geometry however it likes; the numeric contract lives here.

/// Net horizontal displacement (in gesture units) a drag must reach before
/// it moves the focus.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Horizontal distance between stacked neighbors.
pub const CARD_SPACING: f32 = 30.0;
/// Base offset pushing unfocused cards toward the edges.
pub const CARD_EDGE_OFFSET: f32 = 200.0;
/// Scale applied to unfocused cards.
pub const CARD_SCALE: f32 = 0.85;
/// Vertical sink of unfocused cards.
pub const CARD_DROP: f32 = 20.0;
/// Tilt of unfocused cards, mirrored around the focus.
pub const CARD_TILT_DEGREES: f32 = 5.0;
/// Opacity of unfocused cards.
pub const CARD_DIM_OPACITY: f32 = 0.6;

/// Presentation transform for one card, relative to the deck's focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// 1 for the focused card, 0 for everything else. The focused card
    /// always renders above its neighbors.
    pub stack_order: u8,
    pub scale: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    pub rotation_degrees: f32,
    pub opacity: f32,
}

/// Computes the transform for the card at `index` given the focused index.
pub fn transform_for(index: usize, focus: usize) -> CardTransform {
    if index == focus {
        return CardTransform {
            stack_order: 1,
            scale: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
            rotation_degrees: 0.0,
            opacity: 1.0,
        };
    }

    let delta = index as f32 - focus as f32;
    CardTransform {
        stack_order: 0,
        scale: CARD_SCALE,
        x_offset: delta.signum() * CARD_EDGE_OFFSET + delta * CARD_SPACING,
        y_offset: CARD_DROP,
        rotation_degrees: if index < focus {
            -CARD_TILT_DEGREES
        } else {
            CARD_TILT_DEGREES
        },
        opacity: CARD_DIM_OPACITY,
    }
}

/// Focus cursor over the loaded article list.
///
/// `focus` is only meaningful while `count > 0`; an empty deck renders no
/// cards and every movement is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deck {
    focus: usize,
    count: usize,
}

impl Deck {
    pub fn new() -> Self {
        Deck::default()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Installs a new list length and resets the focus to the first card.
    pub fn replace(&mut self, count: usize) {
        self.count = count;
        self.focus = 0;
    }

    /// Moves focus back to the first card.
    pub fn reset(&mut self) {
        self.focus = 0;
    }

    /// Focuses the next card. Saturates at the last index, no wraparound.
    pub fn advance(&mut self) {
        if self.focus + 1 < self.count {
            self.focus += 1;
        }
    }

    /// Focuses the previous card. Saturates at 0.
    pub fn retreat(&mut self) {
        if self.focus > 0 {
            self.focus -= 1;
        }
    }

    /// Applies a released drag gesture. A leftward drag (negative
    /// displacement) advances, a rightward drag retreats, anything inside
    /// the threshold is ignored. Vertical displacement never reaches here.
    pub fn release(&mut self, displacement: f32) {
        if displacement <= -SWIPE_THRESHOLD {
            self.advance();
        } else if displacement >= SWIPE_THRESHOLD {
            self.retreat();
        }
    }
}
