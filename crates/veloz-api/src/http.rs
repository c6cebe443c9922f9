//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (non-success → [`ApiError::Api`]) so the
//! order, client and login modules stay focused on request construction and
//! response mapping.

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the body becomes the
/// error message; a JSON body's `error` or `detail` string is preferred over
/// the raw text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status, "backend returned an error status");
    Err(ApiError::Api {
        status,
        message: error_message(&body),
    })
}

/// Pull a human message out of an error body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "detail"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}
