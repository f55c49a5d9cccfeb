//! Error types for API operations

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`ApiClient`](crate::ApiClient) operations.
///
/// Every failure is transport-shaped: either the request never completed
/// (`Http`), or the server answered with a non-success status (`Status`).
/// The client performs no classification or recovery beyond this; callers
/// decide what a failure means for them.
#[derive(Debug, Error)]
pub enum Error {
    /// Network, timeout, or response-decode failure from the transport
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status, preserving the original status code and body
    #[error("server returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// IO error reading an upload payload from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the server answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }

    /// The HTTP status code, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            Error::Io(_) => None,
        }
    }
}
