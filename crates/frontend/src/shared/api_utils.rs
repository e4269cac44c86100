//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and decoding responses, plus
//! the transport error type shared by all gateway functions.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Get the base URL for API requests
///
/// Taken from the `RAG_API_URL` build-time setting when provided, falling
/// back to `/api` (the dev-server proxy target). A single trailing slash
/// is stripped so joining with leading-slash paths cannot produce `//`.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_base;
/// let url = format!("{}/query", api_base());
/// ```
pub fn api_base() -> String {
    normalize_base(option_env!("RAG_API_URL").unwrap_or("/api"))
}

fn normalize_base(raw: &str) -> String {
    raw.strip_suffix('/').unwrap_or(raw).to_string()
}

/// Build a full API URL from a leading-slash path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/stats");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Transport-level failure of a gateway call: the backend was unreachable,
/// the request could not be built, or the answer carried a non-success
/// status. A decoded body with `success: false` is NOT a transport error.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status when the backend answered; `None` when the request
    /// never completed
    pub status: Option<u16>,

    /// Backend-supplied `detail` text, when the error body carried one
    pub detail: Option<String>,

    pub message: String,
}

/// FastAPI-style error body
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    /// A failure before any backend answer arrived
    pub fn request(message: impl Into<String>) -> Self {
        Self {
            status: None,
            detail: None,
            message: message.into(),
        }
    }

    fn from_status(status: u16, detail: Option<String>) -> Self {
        let message = match &detail {
            Some(d) => d.clone(),
            None => format!("HTTP {}", status),
        };
        Self {
            status: Some(status),
            detail,
            message,
        }
    }

    /// The backend's own explanation, if it sent one
    pub fn backend_detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Decode a gateway response, mapping non-2xx statuses to [`ApiError`]
/// carrying the backend's `detail` text when the error body provides one.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let detail = response.json::<ErrorBody>().await.ok().map(|b| b.detail);
        return Err(ApiError::from_status(status, detail));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::request(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_strips_exactly_one_trailing_slash() {
        assert_eq!(normalize_base("/api/"), "/api");
        assert_eq!(normalize_base("/api"), "/api");
        assert_eq!(normalize_base("http://localhost:8000/api/"), "http://localhost:8000/api");
        // only the outermost slash is touched
        assert_eq!(normalize_base("http://localhost:8000//"), "http://localhost:8000/");
    }

    #[test]
    fn status_error_prefers_backend_detail() {
        let err = ApiError::from_status(500, Some("Unsupported file type".to_string()));
        assert_eq!(err.to_string(), "Unsupported file type");
        assert_eq!(err.backend_detail(), Some("Unsupported file type"));

        let err = ApiError::from_status(502, None);
        assert_eq!(err.to_string(), "HTTP 502");
        assert_eq!(err.backend_detail(), None);
    }

    #[test]
    fn request_error_has_no_status() {
        let err = ApiError::request("Failed to send request");
        assert_eq!(err.status, None);
        assert_eq!(err.backend_detail(), None);
    }
}
