use serde::{Deserialize, Serialize};

/// Response body for GET /health, used for diagnostics only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
