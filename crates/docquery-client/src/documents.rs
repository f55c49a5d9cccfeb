//! Document operations: list, upload, fetch, delete, and URL construction

use bytes::Bytes;
use reqwest::multipart;
use serde::Deserialize;

use crate::client::{read_json, ApiClient};
use crate::error::{Error, Result};
use crate::progress::{progress_body, ProgressObserver};
use crate::types::document::{Document, FileUpload};
use crate::types::response::{BoundingBox, DeleteConfirmation};

/// Envelope for list responses: `{"success": true, "documents": [...]}`
#[derive(Debug, Deserialize)]
struct DocumentListEnvelope {
    #[allow(dead_code)]
    success: bool,
    documents: Vec<Document>,
}

/// Envelope for single-document responses: `{"success": true, "data": {...}}`
#[derive(Debug, Deserialize)]
struct DocumentEnvelope {
    #[allow(dead_code)]
    success: bool,
    data: Document,
}

impl ApiClient {
    /// List all documents.
    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        let url = self.url("/documents");
        tracing::debug!("GET {url}");
        let response = self.http().get(&url).send().await?;
        let envelope: DocumentListEnvelope = read_json(response).await?;
        Ok(envelope.documents)
    }

    /// Upload a document as a multipart form under the `file` field.
    ///
    /// The observer, when given, receives cumulative progress snapshots as
    /// bytes are handed to the transport; each snapshot is also logged at
    /// debug level. A failure is logged before being returned unchanged to
    /// the caller. No retry is attempted.
    pub async fn upload_document(
        &self,
        file: FileUpload,
        observer: Option<ProgressObserver>,
    ) -> Result<Document> {
        let url = self.url("/documents/upload");
        let total_bytes = file.size();
        tracing::debug!("POST {url} ({}, {} bytes)", file.filename, total_bytes);

        let body = progress_body(file.bytes.clone(), total_bytes, observer);
        let part = multipart::Part::stream_with_length(body, total_bytes)
            .file_name(file.filename.clone())
            .mime_str(&file.mime_type())?;
        let form = multipart::Form::new().part("file", part);

        let result = async {
            let response = self.http().post(&url).multipart(form).send().await?;
            read_json::<DocumentEnvelope>(response).await
        }
        .await;

        match result {
            Ok(envelope) => {
                tracing::info!(
                    "Uploaded {} ({} bytes) as document {}",
                    file.filename,
                    total_bytes,
                    envelope.data.id
                );
                Ok(envelope.data)
            }
            Err(err) => {
                tracing::error!("Upload of {} failed: {err}", file.filename);
                Err(err)
            }
        }
    }

    /// Fetch a single document's metadata.
    ///
    /// A missing document surfaces as the server's not-found status error;
    /// no existence check happens client-side.
    pub async fn get_document(&self, id: &str) -> Result<Document> {
        let url = self.url(&format!("/documents/{id}"));
        tracing::debug!("GET {url}");
        let response = self.http().get(&url).send().await?;
        let envelope: DocumentEnvelope = read_json(response).await?;
        Ok(envelope.data)
    }

    /// Delete a document. Idempotency is the server's contract.
    pub async fn delete_document(&self, id: &str) -> Result<DeleteConfirmation> {
        let url = self.url(&format!("/documents/{id}"));
        tracing::debug!("DELETE {url}");
        let response = self.http().delete(&url).send().await?;
        read_json(response).await
    }

    /// Download a document's original file bytes.
    pub async fn get_document_file(&self, id: &str) -> Result<Bytes> {
        let url = self.document_file_url(id);
        tracing::debug!("GET {url}");
        let response = self.http().get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }
        Ok(response.bytes().await?)
    }

    /// URL of a document's original file.
    ///
    /// Pure computation: no network call is made, and neither reachability
    /// nor the document's existence is checked.
    pub fn document_file_url(&self, id: &str) -> String {
        format!("{}/documents/{id}/file", self.config().api_root())
    }

    /// URL of a rendered page image, optionally cropped to a bounding box.
    pub fn page_image_url(&self, id: &str, page: u32, bbox: Option<&BoundingBox>) -> String {
        let base = format!(
            "{}/documents/{id}/page/{page}/image",
            self.config().api_root()
        );
        match bbox {
            Some(b) => format!(
                "{base}?bbox_x1={}&bbox_y1={}&bbox_x2={}&bbox_y2={}",
                b.x1, b.y1, b.x2, b.y2
            ),
            None => base,
        }
    }
}
