//! # Client configuration (`feed.toml`)
//!
//! Defines the TOML configuration embedded in the web binary. It tells the
//! client where the feed API lives and under which key the session is
//! persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"   # images are served from here too
//!
//! [session]
//! storage_key = "feed.session"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`FeedConfig`] | Top-level config. Builder helpers (`with_base_url`), TOML (de)serialisation, and [`FeedConfig::load`] which also applies the `FEED_API_URL` build-time override. |
//! | [`ApiConfig`] | API section, the base URL with a default of **`http://localhost:8000`**. |
//! | [`SessionConfig`] | Session section, the persistence key. |
//!
//! All structs derive `Default` so a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Errors raised while loading [`FeedConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid feed.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("base_url must be an http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Top-level configuration stored in `feed.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the feed API lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session persistence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key the session is stored under in browser storage.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "feed.session".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl FeedConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Parse `embedded`, apply the `FEED_API_URL` build-time override and validate.
    pub fn load(embedded: &str) -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(embedded)?;
        if let Some(url) = option_env!("FEED_API_URL") {
            config.api.base_url = url.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject base URLs the HTTP client cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl(url.clone()))
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
