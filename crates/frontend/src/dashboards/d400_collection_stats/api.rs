use crate::shared::api_utils::{api_url, decode_json, ApiError};
use contracts::dashboards::d400_collection_stats::{ClearResponse, StatsResponse};
use gloo_net::http::Request;

/// Fetch aggregate collection metrics
pub async fn get_stats() -> Result<StatsResponse, ApiError> {
    let response = Request::get(&api_url("/stats"))
        .send()
        .await
        .map_err(|e| ApiError::request(format!("Failed to send request: {}", e)))?;

    decode_json(response).await
}

/// Delete every indexed document. Destructive on the backend and
/// irreversible; callers gate this behind an explicit confirmation.
pub async fn clear_collection() -> Result<ClearResponse, ApiError> {
    let response = Request::delete(&api_url("/clear"))
        .send()
        .await
        .map_err(|e| ApiError::request(format!("Failed to send request: {}", e)))?;

    decode_json(response).await
}
