//! # Application State
//!
//! Core business state for Newsdeck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn StoryProvider>  // news API client
//! ├── load_state: LoadState             // Idle/Loading/Loaded/Failed
//! ├── category: Category                // current section
//! ├── deck: Deck                        // focus cursor over the list
//! ├── status_message: String            // status bar text
//! ├── last_updated: Option<DateTime>    // stamp of the last Loaded
//! └── fetch_seq: u64                    // latest issued request tag
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use chrono::{DateTime, Local};
use std::sync::Arc;

use crate::core::deck::Deck;
use crate::news::{Article, Category, StoryProvider};

/// Loading lifecycle of the article list. Exactly one variant is active;
/// the list itself lives inside `Loaded`, so entering any other state
/// drops it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Article>),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The loaded articles, or an empty slice in every other state.
    pub fn articles(&self) -> &[Article] {
        match self {
            LoadState::Loaded(articles) => articles,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub struct App {
    pub provider: Arc<dyn StoryProvider>,
    pub load_state: LoadState,
    pub category: Category,
    pub deck: Deck,
    pub status_message: String,
    pub last_updated: Option<DateTime<Local>>,
    /// Monotonic tag of the most recently issued fetch. Completions carrying
    /// an older tag are discarded.
    pub fetch_seq: u64,
}

impl App {
    pub fn new(provider: Arc<dyn StoryProvider>, category: Category) -> Self {
        Self {
            provider,
            load_state: LoadState::Idle,
            category,
            deck: Deck::new(),
            status_message: String::from("Press c to pick a category"),
            last_updated: None,
            fetch_seq: 0,
        }
    }
}
