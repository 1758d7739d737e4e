//! Storefront configuration.

use std::time::Duration;

use cartella_data::{FetchClient, HttpCatalogApi};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "CARTELLA_API_URL";

/// Service root used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Top-level configuration for a storefront session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Remote catalog service.
    #[serde(default)]
    pub api: ApiConfig,

    /// Log output.
    #[serde(default)]
    pub log: LogConfig,
}

impl StorefrontConfig {
    /// Apply `CARTELLA_API_URL` if it is set and non-blank.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    /// Replace the base URL with `url` when it is present and non-blank.
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// An HTTP client configured for the catalog service.
    pub fn fetch_client(&self) -> FetchClient {
        let client = FetchClient::new()
            .with_base_url(self.api.base_url.clone())
            .with_default_header("Accept", "application/json");
        match self.api.timeout() {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }

    /// The catalog service over HTTP.
    pub fn http_api(&self) -> HttpCatalogApi {
        HttpCatalogApi::new(self.fetch_client())
    }
}

/// Remote service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Service root; `/products` and `/search` are resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
