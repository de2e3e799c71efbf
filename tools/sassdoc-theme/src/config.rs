//! Theme configuration.
//!
//! Read from an optional JSON file. Every key has a default, so a partial file
//! is merged over the defaults, and unknown keys are ignored so a full
//! `.sassdocrc` converted to JSON can be passed as is.

use anyhow::{Context, Result};
use sassdoc_client::{ClientOptions, DomContract, SearchOptions};
use sassdoc_search::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Theme settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Page title.
    pub title: String,
    /// Favicon URL.
    pub shortcut_icon: String,
    /// URL of the client's JavaScript glue, relative to the page.
    pub client_script: String,
    /// Client search behaviour.
    pub search: SearchOptions,
    /// Ids and class names shared by the page and the client.
    pub dom: DomContract,
    /// Handling of entries with the same type and name.
    pub duplicates: DuplicatePolicy,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            title: "SassDoc".to_string(),
            shortcut_icon: "http://sass-lang.com/favicon.ico".to_string(),
            client_script: "./assets/js/sassdoc_client.js".to_string(),
            search: SearchOptions::default(),
            dom: DomContract::default(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl ThemeConfig {
    /// Load from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(?path, "loaded theme config");
        Ok(config)
    }

    /// Parse from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Options handed to the in-page client.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            search: self.search.clone(),
            dom: self.dom.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ThemeConfig::from_json(r#"{"title":"Ignite UI","duplicates":"replace"}"#)
            .unwrap();
        assert_eq!(config.title, "Ignite UI");
        assert_eq!(config.duplicates, DuplicatePolicy::Replace);
        assert_eq!(config.shortcut_icon, "http://sass-lang.com/favicon.ico");
        assert_eq!(config.search.edit_distance, 1);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config =
            ThemeConfig::from_json(r#"{"dest":"./docs","groups":{"undefined":"General"}}"#)
                .unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_nested_merge() {
        let config = ThemeConfig::from_json(r#"{"search":{"limit":10}}"#).unwrap();
        assert_eq!(config.search.limit, Some(10));
        assert_eq!(config.search.type_label_len, Some(3));
    }

    #[test]
    fn test_no_path_is_default() {
        assert_eq!(ThemeConfig::load(None).unwrap(), ThemeConfig::default());
    }
}
