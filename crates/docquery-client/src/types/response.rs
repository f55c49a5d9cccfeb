//! Response types for chat queries and document operations

use serde::{Deserialize, Serialize};

/// Answer to a chat query with supporting citations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Server success flag
    pub success: bool,
    /// Generated answer text
    pub answer: String,
    /// Source chunks backing the answer
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// A source chunk cited by an answer
///
/// Mirrors the server's search result: the chunk's content and position plus
/// the similarity score and the owning document's filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Chunk identifier
    pub id: String,
    /// Owning document identifier
    pub document_id: String,
    /// Chunk text
    pub content: String,
    /// Chunk index within the document
    #[serde(default)]
    pub chunk_index: u32,
    /// Page number (1-indexed; 0 when unknown)
    #[serde(default)]
    pub page_number: u32,
    /// Character offsets within the extracted page text
    #[serde(default)]
    pub start_pos: u32,
    #[serde(default)]
    pub end_pos: u32,
    /// Bounding box coordinates on the page, when the server extracted them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox_x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox_y1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox_x2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox_y2: Option<f64>,
    /// Similarity score
    #[serde(default)]
    pub score: f64,
    /// Owning document's filename
    #[serde(default)]
    pub filename: String,
}

impl Citation {
    /// The chunk's bounding box, if all four coordinates are present
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match (self.bbox_x1, self.bbox_y1, self.bbox_x2, self.bbox_y2) {
            (Some(x1), Some(y1), Some(x2), Some(y2)) => Some(BoundingBox { x1, y1, x2, y2 }),
            _ => None,
        }
    }

    /// Format the citation for display
    pub fn format_inline(&self) -> String {
        if self.page_number > 0 {
            format!("[Source: {}, Page {}]", self.filename, self.page_number)
        } else {
            format!("[Source: {}]", self.filename)
        }
    }
}

/// Rectangle on a page, in PDF coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Confirmation returned by a document delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    /// Server success flag
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
}
