use crate::shared::api_utils::{api_url, decode_json, ApiError};
use contracts::usecases::u501_upload_document::UploadResponse;
use gloo_net::http::Request;
use web_sys::FormData;

/// Upload a document as multipart form data under the `file` field
///
/// A decoded body with `success: false` is a backend refusal the caller
/// must inspect; `Err` means the transfer itself failed.
pub async fn upload(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form_data =
        FormData::new().map_err(|e| ApiError::request(format!("Failed to build form: {:?}", e)))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| ApiError::request(format!("Failed to build form: {:?}", e)))?;

    let response = Request::post(&api_url("/upload"))
        .body(form_data)
        .map_err(|e| ApiError::request(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::request(format!("Failed to send request: {}", e)))?;

    decode_json(response).await
}
