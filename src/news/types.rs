use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A normalized news article, ready for display.
///
/// Built once from a raw API record and never mutated; a new fetch replaces
/// the whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Client-side identity. The API exposes no stable id for top stories.
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
}

impl Article {
    pub fn new(
        title: String,
        description: Option<String>,
        image_url: Option<String>,
        link_url: Option<String>,
    ) -> Self {
        Article {
            id: Uuid::new_v4(),
            title,
            description,
            image_url,
            link_url,
        }
    }
}

/// Top-stories section of the news API.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    World,
    Business,
    Technology,
    Science,
    Health,
    Sports,
    Arts,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::World,
        Category::Business,
        Category::Technology,
        Category::Science,
        Category::Health,
        Category::Sports,
        Category::Arts,
    ];

    /// Lowercase form used in the request path.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::World => "world",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Science => "science",
            Category::Health => "health",
            Category::Sports => "sports",
            Category::Arts => "arts",
        }
    }

    /// Capitalized form for display.
    pub fn label(self) -> &'static str {
        match self {
            Category::World => "World",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Science => "Science",
            Category::Health => "Health",
            Category::Sports => "Sports",
            Category::Arts => "Arts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
