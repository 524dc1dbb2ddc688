//! Browser configuration, stored as RON.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```ron
//! (
//!     page_size: 24,
//!     language: "en",
//! )
//! ```

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2/";
pub const DEFAULT_CATALOG_LIMIT: usize = 649;
pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 7;
pub const DEFAULT_LANGUAGE: &str = "es";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Prefix stripped from resource references to get API paths.
    pub api_base_url: String,
    /// How many species the catalog requests.
    pub catalog_limit: usize,
    /// Cards per page.
    pub page_size: usize,
    /// Width of the pagination button window.
    pub max_visible_pages: usize,
    /// Language code used when picking translated ability names.
    pub language: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl BrowserConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        let config: BrowserConfig =
            ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        if self.max_visible_pages == 0 {
            return Err(ConfigError::Invalid(
                "max_visible_pages must be at least 1".into(),
            ));
        }
        if self.catalog_limit == 0 {
            return Err(ConfigError::Invalid(
                "catalog_limit must be at least 1".into(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::Invalid("language must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = BrowserConfig::from_ron_str("()").expect("defaults are valid");
        assert_eq!(config, BrowserConfig::default());
        assert_eq!(config.page_size, 12);
        assert_eq!(config.max_visible_pages, 7);
        assert_eq!(config.catalog_limit, 649);
    }

    #[test]
    fn test_partial_override() {
        let config = BrowserConfig::from_ron_str("(page_size: 20, language: \"en\")")
            .expect("valid override");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.language, "en");
        assert_eq!(config.max_visible_pages, DEFAULT_MAX_VISIBLE_PAGES);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = BrowserConfig::from_ron_str("(page_size: 0)");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let result = BrowserConfig::from_ron_str("(page_size: \"many\")");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = BrowserConfig::load(Path::new("/definitely/not/here.ron"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
