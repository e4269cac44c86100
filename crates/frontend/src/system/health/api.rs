use crate::shared::api_utils::{api_url, decode_json, ApiError};
use contracts::system::health::HealthResponse;
use gloo_net::http::Request;

/// Probe the backend; diagnostics only, never on a hot path
pub async fn health_check() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&api_url("/health"))
        .send()
        .await
        .map_err(|e| ApiError::request(format!("Failed to send request: {}", e)))?;

    decode_json(response).await
}
