use serde::{Deserialize, Serialize};

/// Response body for POST /upload.
///
/// A well-formed response with `success: false` is a backend refusal, not
/// a transport failure; `message` then carries the explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,

    pub message: String,

    /// Name the backend stored the document under
    pub filename: String,

    /// Number of chunks indexed from the document
    pub chunks: u64,
}
