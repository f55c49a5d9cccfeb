//! Configuration for the API client

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the default base URL
pub const BASE_URL_ENV: &str = "DOCQUERY_API_URL";

/// API client configuration
///
/// An explicitly constructed, passed-down value: the base URL is fixed at
/// construction and immutable for the lifetime of the client, so multiple
/// clients (e.g. under test) can target different endpoints without shared
/// global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server base URL, without trailing slash or `/api/v1` suffix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 120,
        }
    }
}

impl ApiConfig {
    /// Create a config for a specific base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slashes(base_url.into()),
            ..Default::default()
        }
    }

    /// Resolve the base URL from the environment, falling back to the default
    ///
    /// Honors `DOCQUERY_API_URL` when set and non-empty.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Root for all versioned API paths
    pub fn api_root(&self) -> String {
        format!("{}/api/v1", self.base_url)
    }
}

fn trim_trailing_slashes(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
