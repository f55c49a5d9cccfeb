//! docquery-client: async HTTP client for the docquery document Q&A API
//!
//! Wraps the backend's REST surface behind a typed [`ApiClient`]: document
//! CRUD, multipart upload with progress reporting, file and page-image URL
//! construction, and chat queries. Every operation is a single stateless
//! request/response round trip against `{base_url}/api/v1`; failures surface
//! as [`Error`] without retries or caching.

pub mod chat;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod progress;
pub mod types;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use progress::{ProgressObserver, UploadProgress};
pub use types::{
    document::{Document, DocumentStatus, FileUpload},
    query::QueryRequest,
    response::{BoundingBox, Citation, DeleteConfirmation, QueryResponse},
};
