//! Wire types mirrored from the docquery API

pub mod document;
pub mod query;
pub mod response;

pub use document::{Document, DocumentStatus, FileUpload};
pub use query::QueryRequest;
pub use response::{BoundingBox, Citation, DeleteConfirmation, QueryResponse};
