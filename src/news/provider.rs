use std::fmt;

use async_trait::async_trait;

use super::types::Article;

/// Errors that can occur while fetching stories.
/// Every variant ends up as a displayed message, never a crash.
#[derive(Debug)]
pub enum ProviderError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16 },
    /// The response carried no body at all.
    EmptyBody,
    /// The body did not match the expected schema.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status } => write!(f, "API error (HTTP {status})"),
            ProviderError::EmptyBody => write!(f, "no data received"),
            ProviderError::Parse(msg) => write!(f, "failed to decode response: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait StoryProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the current top stories for a section.
    ///
    /// Takes the section as a plain string: the category set is closed at
    /// the UI surface, but an unknown string is still expressible here and
    /// simply fails remotely.
    async fn top_stories(&self, category: &str) -> Result<Vec<Article>, ProviderError>;
}
