//! NYT Top Stories provider.
//!
//! One GET per fetch: `{base_url}/{section}.json?api-key={key}`. The wire
//! structs below mirror the published response shape; everything else in the
//! payload is ignored.

use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;

use super::provider::{ProviderError, StoryProvider};
use super::types::Article;

pub const DEFAULT_BASE_URL: &str = "https://api.nytimes.com/svc/topstories/v2";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct TopStoriesResponse {
    results: Vec<RawStory>,
}

#[derive(Deserialize, Debug)]
struct RawStory {
    title: String,
    #[serde(rename = "abstract")]
    abstract_text: String,
    url: String,
    multimedia: Option<Vec<RawMultimedia>>,
}

#[derive(Deserialize, Debug)]
struct RawMultimedia {
    url: String,
    #[allow(dead_code)]
    format: String,
}

/// Converts an empty string to None, non-empty to Some.
fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

impl RawStory {
    /// Maps a raw record to an [`Article`], preserving the first multimedia
    /// entry as the thumbnail.
    fn into_article(self) -> Article {
        let image_url = self
            .multimedia
            .and_then(|media| media.into_iter().next())
            .map(|m| m.url);
        Article::new(
            self.title,
            non_empty(self.abstract_text),
            image_url,
            non_empty(self.url),
        )
    }
}

// ============================================================================
// Provider
// ============================================================================

pub struct NytProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl NytProvider {
    /// Creates a provider. `base_url` overrides the production endpoint
    /// (used by tests to point at a mock server).
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        NytProvider {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl StoryProvider for NytProvider {
    fn name(&self) -> &str {
        "nytimes"
    }

    async fn top_stories(&self, category: &str) -> Result<Vec<Article>, ProviderError> {
        let url = format!(
            "{}/{}.json?api-key={}",
            self.base_url, category, self.api_key
        );
        info!("Fetching top stories: section={}", category);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        if body.is_empty() {
            return Err(ProviderError::EmptyBody);
        }

        let parsed: TopStoriesResponse =
            serde_json::from_slice(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;

        debug!(
            "Decoded {} stories for section={}",
            parsed.results.len(),
            category
        );
        Ok(parsed
            .results
            .into_iter()
            .map(RawStory::into_article)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> TopStoriesResponse {
        serde_json::from_str(json).expect("sample payload should parse")
    }

    #[test]
    fn test_raw_story_maps_all_fields() {
        let response = parse(
            r#"{"results":[{"title":"A","abstract":"B","url":"u1",
                "multimedia":[{"url":"img1","format":"x"}]}]}"#,
        );
        let article = response
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_article();
        assert_eq!(article.title, "A");
        assert_eq!(article.description.as_deref(), Some("B"));
        assert_eq!(article.image_url.as_deref(), Some("img1"));
        assert_eq!(article.link_url.as_deref(), Some("u1"));
    }

    #[test]
    fn test_missing_multimedia_yields_no_image() {
        let response =
            parse(r#"{"results":[{"title":"A","abstract":"B","url":"u1"}]}"#);
        let article = response
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_article();
        assert_eq!(article.image_url, None);
    }

    #[test]
    fn test_empty_multimedia_yields_no_image() {
        let response = parse(
            r#"{"results":[{"title":"A","abstract":"B","url":"u1","multimedia":[]}]}"#,
        );
        let article = response
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_article();
        assert_eq!(article.image_url, None);
    }

    #[test]
    fn test_first_multimedia_entry_wins() {
        let response = parse(
            r#"{"results":[{"title":"A","abstract":"B","url":"u1",
                "multimedia":[{"url":"big","format":"superJumbo"},
                              {"url":"small","format":"thumb"}]}]}"#,
        );
        let article = response
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_article();
        assert_eq!(article.image_url.as_deref(), Some("big"));
    }

    #[test]
    fn test_empty_abstract_becomes_none() {
        let response =
            parse(r#"{"results":[{"title":"A","abstract":"","url":"u1"}]}"#);
        let article = response
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_article();
        assert_eq!(article.description, None);
    }

    #[test]
    fn test_source_order_preserved() {
        let response = parse(
            r#"{"results":[
                {"title":"first","abstract":"1","url":"u1"},
                {"title":"second","abstract":"2","url":"u2"},
                {"title":"third","abstract":"3","url":"u3"}]}"#,
        );
        let titles: Vec<String> = response
            .results
            .into_iter()
            .map(|raw| raw.into_article().title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_schema_mismatch_fails() {
        let result: Result<TopStoriesResponse, _> =
            serde_json::from_str(r#"{"stories":[]}"#);
        assert!(result.is_err());
    }
}
