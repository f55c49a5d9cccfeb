//! Upload progress reporting

use std::sync::Arc;

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::Body;

/// Observer invoked with a snapshot each time upload bytes go out
pub type ProgressObserver = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// Immutable snapshot of upload progress
///
/// `bytes_sent` is monotonically non-decreasing across the events of a single
/// upload; no other ordering is guaranteed. `total_bytes` is `None` when the
/// transfer size is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    /// Bytes handed to the transport so far
    pub bytes_sent: u64,
    /// Total bytes in the transfer, if known
    pub total_bytes: Option<u64>,
}

impl UploadProgress {
    /// Completion percentage, rounded to the nearest integer.
    ///
    /// An unknown total is treated as 1 so the division stays defined; the
    /// value is not meaningful in that case and may exceed 100.
    pub fn percent(&self) -> u64 {
        let total = self.total_bytes.unwrap_or(0).max(1);
        ((self.bytes_sent as f64 * 100.0) / total as f64).round() as u64
    }
}

/// Chunk size for the counting upload stream
const CHUNK_SIZE: usize = 64 * 1024;

/// Wrap upload bytes in a streaming body that reports cumulative progress
/// per chunk, to the log and to the observer when one is given.
pub(crate) fn progress_body(
    data: Bytes,
    total_bytes: u64,
    observer: Option<ProgressObserver>,
) -> Body {
    let chunks = split_chunks(&data);
    let mut sent = 0u64;

    let stream = futures_util::stream::iter(chunks).map(move |chunk| {
        sent += chunk.len() as u64;
        let snapshot = UploadProgress {
            bytes_sent: sent,
            total_bytes: Some(total_bytes),
        };
        tracing::debug!(
            "Upload progress: {}% ({}/{} bytes)",
            snapshot.percent(),
            snapshot.bytes_sent,
            total_bytes
        );
        if let Some(observer) = &observer {
            observer(snapshot);
        }
        Ok::<Bytes, std::io::Error>(chunk)
    });

    Body::wrap_stream(stream)
}

fn split_chunks(data: &Bytes) -> Vec<Bytes> {
    let mut chunks = Vec::with_capacity(data.len() / CHUNK_SIZE + 1);
    let mut offset = 0;
    while offset < data.len() {
        let end = (offset + CHUNK_SIZE).min(data.len());
        chunks.push(data.slice(offset..end));
        offset = end;
    }
    chunks
}
