use super::aggregate::SourceRef;
use serde::{Deserialize, Serialize};

/// Request body for POST /query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,

    /// Number of passages to retrieve
    pub k: u32,
}

/// Response body for POST /query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,

    /// Attributed passages in relevance order
    pub sources: Vec<SourceRef>,

    pub success: bool,
}
