//! Document metadata and upload payload types

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Processing status reported by the server for an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Ingestion is still running
    Processing,
    /// Chunking and embedding finished
    Completed,
    /// Ingestion failed server-side
    Error,
}

impl DocumentStatus {
    /// Check whether processing has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Processing)
    }
}

/// Document metadata as stored by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Opaque document identifier
    pub id: String,
    /// Original filename as uploaded
    pub filename: String,
    /// Server-side storage path
    pub file_path: String,
    /// File size in bytes
    pub file_size: u64,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Upload timestamp
    pub upload_time: DateTime<Utc>,
    /// Processing status
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// File payload for upload: a named binary blob
///
/// The client does not inspect or validate the content; size and type limits
/// are enforced server-side or not at all.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Filename sent in the multipart form
    pub filename: String,
    /// Raw file bytes
    pub bytes: Bytes,
}

impl FileUpload {
    /// Create an upload payload from in-memory bytes
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Read an upload payload from disk, taking the filename from the path
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(filename, bytes))
    }

    /// Payload size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Guess the MIME type from the filename extension
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Processing).unwrap(),
            "\"processing\""
        );
        let status: DocumentStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, DocumentStatus::Completed);
        assert!(status.is_terminal());
        assert!(!DocumentStatus::Processing.is_terminal());
    }

    #[test]
    fn test_document_deserializes_server_shape() {
        let json = r#"{
            "id": "8c9f4a3e",
            "filename": "report.pdf",
            "file_path": "/data/uploads/8c9f4a3e.pdf",
            "file_size": 4096,
            "total_pages": 12,
            "upload_time": "2026-08-01T10:00:00Z",
            "status": "completed",
            "created_at": "2026-08-01T10:00:00Z",
            "updated_at": "2026-08-01T10:05:00Z"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "8c9f4a3e");
        assert_eq!(doc.file_size, 4096);
        assert_eq!(doc.total_pages, 12);
        assert_eq!(doc.status, DocumentStatus::Completed);
    }

    #[test]
    fn test_upload_mime_guess() {
        assert_eq!(
            FileUpload::new("report.pdf", Bytes::new()).mime_type(),
            "application/pdf"
        );
        assert_eq!(
            FileUpload::new("blob.unknown-ext", Bytes::new()).mime_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_upload_size() {
        let upload = FileUpload::new("a.bin", vec![0u8; 1234]);
        assert_eq!(upload.size(), 1234);
    }
}
