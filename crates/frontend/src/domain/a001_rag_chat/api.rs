use crate::shared::api_utils::{api_url, decode_json, ApiError};
use contracts::domain::a001_rag_chat::query::{QueryRequest, QueryResponse};
use gloo_net::http::Request;

/// Number of passages requested per question unless the caller asks for
/// something else
pub const DEFAULT_TOP_K: u32 = 4;

/// Ask the collection a question
///
/// Returns the generated answer plus the passages that grounded it, in
/// relevance order.
pub async fn query(question: &str, k: u32) -> Result<QueryResponse, ApiError> {
    let request = QueryRequest {
        question: question.to_string(),
        k,
    };

    let response = Request::post(&api_url("/query"))
        .json(&request)
        .map_err(|e| ApiError::request(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::request(format!("Failed to send request: {}", e)))?;

    decode_json(response).await
}
