//! Chat query request types

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/chat/query`
///
/// Serialized verbatim: the question text plus the ordered list of document
/// identifiers to search. Identifiers are opaque strings; the client does not
/// validate their shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Free-text question
    pub query: String,
    /// Documents to search, in caller-supplied order
    pub document_ids: Vec<String>,
}

impl QueryRequest {
    /// Create a query over the given documents
    pub fn new(query: impl Into<String>, document_ids: Vec<String>) -> Self {
        Self {
            query: query.into(),
            document_ids,
        }
    }

    /// Add a document to the search scope
    pub fn with_document(mut self, id: impl Into<String>) -> Self {
        self.document_ids.push(id.into());
        self
    }
}
