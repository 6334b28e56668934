pub mod nytimes;
pub mod provider;
pub mod types;

pub use nytimes::NytProvider;
pub use provider::{ProviderError, StoryProvider};
pub use types::{Article, Category};
