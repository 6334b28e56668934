//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::state::App;
use crate::news::{Article, Category, ProviderError, StoryProvider};

/// A provider serving a canned article list, for tests that never touch
/// the network.
pub struct StaticProvider {
    pub articles: Vec<Article>,
}

#[async_trait]
impl StoryProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn top_stories(&self, _category: &str) -> Result<Vec<Article>, ProviderError> {
        Ok(self.articles.clone())
    }
}

/// A provider that always fails with a network error.
pub struct FailingProvider;

#[async_trait]
impl StoryProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn top_stories(&self, _category: &str) -> Result<Vec<Article>, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}

/// Builds `n` distinct articles.
pub fn sample_articles(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| {
            Article::new(
                format!("Story {i}"),
                Some(format!("Summary of story {i}")),
                Some(format!("https://example.com/{i}.jpg")),
                Some(format!("https://example.com/story/{i}")),
            )
        })
        .collect()
}

/// Creates a test App with an empty StaticProvider.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticProvider { articles: vec![] }),
        Category::World,
    )
}
