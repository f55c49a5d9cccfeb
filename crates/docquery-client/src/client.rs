//! API client core
//!
//! The [`ApiClient`] structure and the HTTP plumbing shared by all
//! operations: default headers, URL construction, and response decoding.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Version of the crate, used in the User-Agent header
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the docquery API
///
/// Owns a configured `reqwest::Client` with JSON default headers. Every
/// operation is an independent asynchronous request/response round trip;
/// concurrent calls share only the underlying connection pool. There is no
/// retry, caching, or sequencing between calls.
///
/// # Example
///
/// ```rust,no_run
/// use docquery_client::{ApiClient, ApiConfig};
///
/// let client = ApiClient::new(ApiConfig::new("http://localhost:8080"));
/// ```
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
    request_id: String,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    ///
    /// The client is configured with:
    /// - `Accept`/`Content-Type: application/json` (the upload call overrides
    ///   the content type per request with the multipart boundary)
    /// - `User-Agent: docquery-client/<version>`
    /// - `X-Request-Id`: a per-client id for correlating server logs
    pub fn new(config: ApiConfig) -> Self {
        let request_id = Uuid::new_v4().simple().to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("docquery-client/{VERSION}"))
                .unwrap_or_else(|_| HeaderValue::from_static("docquery-client")),
        );
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            headers.insert("X-Request-Id", value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            request_id,
        }
    }

    /// Create a client resolving the base URL from the environment.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Request correlation id sent with every call.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Check if the server is reachable and healthy.
    ///
    /// Probes `GET {base_url}/health`. A connection failure reports
    /// `Ok(false)` rather than an error.
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Build a fully qualified URL under the versioned API root.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_root(), path)
    }
}

/// Decode a JSON response, converting a non-success status into
/// [`Error::Status`] with the original status code and body text.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Status { status, body });
    }
    Ok(response.json().await?)
}
