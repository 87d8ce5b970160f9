//! Application configuration
//!
//! Configuration loaded from .hacker-stories.toml file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that overrides `api_endpoint`
pub const API_ENDPOINT_ENV: &str = "HACKER_STORIES_API_ENDPOINT";

/// Application configuration loaded from .hacker-stories.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Search endpoint; the encoded query is appended to it
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// Search term used when nothing has been stored yet
    #[serde(default = "default_query")]
    pub default_query: String,

    /// Per-request timeout for the search API
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Key under which the last search term is stored
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_api_endpoint() -> String {
    "https://hn.algolia.com/api/v1/search?query=".to_string()
}

fn default_query() -> String {
    "React".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_storage_key() -> String {
    "search".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            default_query: default_query(),
            request_timeout_secs: default_request_timeout_secs(),
            storage_key: default_storage_key(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(API_ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            log::info!("Using API endpoint from {}: {}", API_ENDPOINT_ENV, endpoint);
            self.api_endpoint = endpoint;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
