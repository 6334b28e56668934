//! # Configuration
//!
//! One place for every setting, resolved in a fixed order:
//! defaults → config file → env vars → CLI flags.
//!
//! The file lives at `~/.newsdeck/config.toml`. On first run a fully
//! commented-out copy is written there so every option is discoverable.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::news::Category;
use crate::news::nytimes::DEFAULT_BASE_URL;

// ============================================================================
// File Schema (every field Option<T>, so sparse files parse)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewsdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub nytimes: NytimesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_category: Option<Category>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NytimesConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub category: Category,
    pub api_key: Option<String>,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.newsdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".newsdeck").join("config.toml"))
}

/// Load config from `~/.newsdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NewsdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NewsdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("No home directory available, running on built-in defaults");
            return Ok(NewsdeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file yet, writing a template to {}", path.display());
        generate_default_config(&path);
        return Ok(NewsdeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: NewsdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Newsdeck Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_category = "world"   # world, business, technology, science, health, sports, arts

# [nytimes]
# api_key = "..."              # Or set NYT_API_KEY env var
# base_url = "https://api.nytimes.com/svc/topstories/v2"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_category` is from the CLI flag (None = not specified).
pub fn resolve(config: &NewsdeckConfig, cli_category: Option<Category>) -> ResolvedConfig {
    // Category: CLI → env → config → default
    let category = cli_category
        .or_else(|| {
            std::env::var("NEWSDECK_CATEGORY")
                .ok()
                .and_then(|s| Category::from_str(&s, true).ok())
        })
        .or(config.general.default_category)
        .unwrap_or_default();

    // API key: env → config
    let api_key = std::env::var("NYT_API_KEY")
        .ok()
        .or_else(|| config.nytimes.api_key.clone());

    // Base URL: env → config → default
    let base_url = std::env::var("NYT_BASE_URL")
        .ok()
        .or_else(|| config.nytimes.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        category,
        api_key,
        base_url,
    }
}
