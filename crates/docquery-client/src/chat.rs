//! Chat query operation

use crate::client::{read_json, ApiClient};
use crate::error::Result;
use crate::types::query::QueryRequest;
use crate::types::response::QueryResponse;

impl ApiClient {
    /// Submit a chat query over the given documents.
    ///
    /// The request body is the serialized [`QueryRequest`], unmodified.
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let url = self.url("/chat/query");
        tracing::debug!("POST {url} ({} document(s))", request.document_ids.len());
        let response = self.http().post(&url).json(request).send().await?;
        read_json(response).await
    }
}
