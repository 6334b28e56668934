//! # Actions
//!
//! Everything that can happen in Newsdeck becomes an `Action`.
//! User picks a section? That's `Action::FetchNews(category)`.
//! The request finishes? That's `Action::FetchCompleted { seq, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller should
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the whole loading lifecycle testable without a terminal or a
//! network: feed actions, assert on state.

use log::{debug, info, warn};

use crate::core::state::{App, LoadState};
use crate::news::{Article, Category, ProviderError};

#[derive(Debug)]
pub enum Action {
    /// Request top stories for a section. No-op while a fetch is in flight.
    FetchNews(Category),
    /// A fetch finished. `seq` tags which request this answers.
    FetchCompleted {
        seq: u64,
        result: Result<Vec<Article>, ProviderError>,
    },
    /// A horizontal drag was released with this net displacement.
    SwipeReleased(f32),
    /// Keyboard: focus the next card.
    NextCard,
    /// Keyboard: focus the previous card.
    PrevCard,
    Quit,
}

/// What the caller must do after a state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the network call for this request tag.
    SpawnFetch { category: Category, seq: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchNews(category) => {
            // At most one outstanding request.
            if app.load_state.is_loading() {
                debug!("Fetch for {} ignored: already loading", category);
                return Effect::None;
            }

            app.fetch_seq += 1;
            app.category = category;
            // Entering Loading drops any previously loaded list.
            app.load_state = LoadState::Loading;
            app.deck.replace(0);
            app.status_message = format!("Loading {}...", category.label());
            info!("Fetch issued: section={} seq={}", category, app.fetch_seq);
            Effect::SpawnFetch {
                category,
                seq: app.fetch_seq,
            }
        }

        Action::FetchCompleted { seq, result } => {
            // A completion for anything but the latest request is stale:
            // the user has already moved on, so its list must not win.
            if seq != app.fetch_seq {
                warn!(
                    "Discarding stale completion: seq={} latest={}",
                    seq, app.fetch_seq
                );
                return Effect::None;
            }

            match result {
                Ok(articles) => {
                    info!(
                        "Loaded {} stories for {} (seq={})",
                        articles.len(),
                        app.category,
                        seq
                    );
                    app.deck.replace(articles.len());
                    app.load_state = LoadState::Loaded(articles);
                    app.last_updated = Some(chrono::Local::now());
                    app.status_message = format!("{} top stories", app.category.label());
                }
                Err(e) => {
                    warn!("Fetch failed for {} (seq={}): {}", app.category, seq, e);
                    app.deck.replace(0);
                    app.load_state = LoadState::Failed(e.to_string());
                    app.status_message = String::from("Fetch failed");
                }
            }
            Effect::None
        }

        Action::SwipeReleased(displacement) => {
            app.deck.release(displacement);
            Effect::None
        }

        Action::NextCard => {
            app.deck.advance();
            Effect::None
        }

        Action::PrevCard => {
            app.deck.retreat();
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_articles, test_app};

    #[test]
    fn test_fetch_from_idle_enters_loading_synchronously() {
        let mut app = test_app();
        let effect = update(&mut app, Action::FetchNews(Category::Technology));
        assert_eq!(app.load_state, LoadState::Loading);
        assert_eq!(app.category, Category::Technology);
        assert!(app.deck.is_empty());
        assert_eq!(
            effect,
            Effect::SpawnFetch {
                category: Category::Technology,
                seq: 1
            }
        );
    }

    #[test]
    fn test_fetch_clears_prior_articles_immediately() {
        let mut app = test_app();
        update(&mut app, Action::FetchNews(Category::World));
        let seq = app.fetch_seq;
        update(
            &mut app,
            Action::FetchCompleted {
                seq,
                result: Ok(sample_articles(3)),
            },
        );
        assert_eq!(app.load_state.articles().len(), 3);

        update(&mut app, Action::FetchNews(Category::Science));
        assert!(app.load_state.articles().is_empty());
        assert_eq!(app.load_state, LoadState::Loading);
    }

    #[test]
    fn test_fetch_while_loading_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::FetchNews(Category::World));
        let seq_before = app.fetch_seq;

        let effect = update(&mut app, Action::FetchNews(Category::Arts));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.fetch_seq, seq_before);
        // The guarded call must not even retarget the category.
        assert_eq!(app.category, Category::World);
        assert_eq!(app.load_state, LoadState::Loading);
    }

    #[test]
    fn test_success_loads_articles_and_resets_focus() {
        let mut app = test_app();
        update(&mut app, Action::FetchNews(Category::World));
        update(&mut app, Action::NextCard); // harmless on empty deck
        let seq = app.fetch_seq;
        update(
            &mut app,
            Action::FetchCompleted {
                seq,
                result: Ok(sample_articles(4)),
            },
        );
        assert_eq!(app.load_state.articles().len(), 4);
        assert_eq!(app.deck.focus(), 0);
        assert_eq!(app.deck.count(), 4);
        assert!(app.last_updated.is_some());
    }

    #[test]
    fn test_failure_records_message_and_empties_deck() {
        let mut app = test_app();
        update(&mut app, Action::FetchNews(Category::World));
        let seq = app.fetch_seq;
        update(
            &mut app,
            Action::FetchCompleted {
                seq,
                result: Err(ProviderError::EmptyBody),
            },
        );
        assert_eq!(app.load_state.error(), Some("no data received"));
        assert!(app.load_state.articles().is_empty());
        assert!(app.deck.is_empty());
    }

    #[test]
    fn test_terminal_states_permit_refetch() {
        let mut app = test_app();
        update(&mut app, Action::FetchNews(Category::World));
        let seq = app.fetch_seq;
        update(
            &mut app,
            Action::FetchCompleted {
                seq,
                result: Err(ProviderError::Network("timeout".to_string())),
            },
        );
        assert!(matches!(app.load_state, LoadState::Failed(_)));

        let effect = update(&mut app, Action::FetchNews(Category::Health));
        assert_eq!(app.load_state, LoadState::Loading);
        assert_eq!(
            effect,
            Effect::SpawnFetch {
                category: Category::Health,
                seq: 2
            }
        );
    }

    #[test]
    fn test_stale_completion_discarded() {
        let mut app = test_app();
        update(&mut app, Action::FetchNews(Category::World));
        let stale_seq = app.fetch_seq;
        update(
            &mut app,
            Action::FetchCompleted {
                seq: stale_seq,
                result: Err(ProviderError::Network("timeout".to_string())),
            },
        );
        // Failure is terminal, so a new fetch may be issued.
        update(&mut app, Action::FetchNews(Category::Science));
        let current_seq = app.fetch_seq;
        assert_ne!(stale_seq, current_seq);

        // The first request's answer straggles in late. It must not
        // overwrite the newer cycle.
        update(
            &mut app,
            Action::FetchCompleted {
                seq: stale_seq,
                result: Ok(sample_articles(9)),
            },
        );
        assert_eq!(app.load_state, LoadState::Loading);

        update(
            &mut app,
            Action::FetchCompleted {
                seq: current_seq,
                result: Ok(sample_articles(2)),
            },
        );
        assert_eq!(app.load_state.articles().len(), 2);
    }

    #[test]
    fn test_swipe_and_keys_move_focus_within_bounds() {
        let mut app = test_app();
        update(&mut app, Action::FetchNews(Category::Technology));
        let seq = app.fetch_seq;
        update(
            &mut app,
            Action::FetchCompleted {
                seq,
                result: Ok(sample_articles(3)),
            },
        );

        update(&mut app, Action::SwipeReleased(-60.0));
        assert_eq!(app.deck.focus(), 1);
        update(&mut app, Action::SwipeReleased(10.0));
        assert_eq!(app.deck.focus(), 1); // below threshold
        update(&mut app, Action::NextCard);
        update(&mut app, Action::NextCard);
        assert_eq!(app.deck.focus(), 2); // saturated at last index
        update(&mut app, Action::PrevCard);
        assert_eq!(app.deck.focus(), 1);
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[tokio::test]
    async fn test_completion_roundtrip_through_provider() {
        use crate::news::StoryProvider;
        use crate::test_support::StaticProvider;
        use std::sync::Arc;

        let provider = Arc::new(StaticProvider {
            articles: sample_articles(2),
        });
        let mut app = crate::core::state::App::new(provider.clone(), Category::World);

        let Effect::SpawnFetch { category, seq } =
            update(&mut app, Action::FetchNews(Category::World))
        else {
            panic!("expected a fetch effect");
        };

        // Perform the fetch the way the event loop's spawned task would.
        let result = provider.top_stories(category.as_str()).await;
        update(&mut app, Action::FetchCompleted { seq, result });
        assert_eq!(app.load_state.articles().len(), 2);
        assert_eq!(app.deck.count(), 2);
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_as_failed_state() {
        use crate::news::StoryProvider;
        use crate::test_support::FailingProvider;

        let result = FailingProvider.top_stories("world").await;
        let mut app = test_app();
        update(&mut app, Action::FetchNews(Category::World));
        let seq = app.fetch_seq;
        update(&mut app, Action::FetchCompleted { seq, result });

        match &app.load_state {
            LoadState::Failed(message) => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
