//! Shared HTTP response helpers for the PostgREST adapter.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`StoreError::Api`] with the backend's own error
//! message when it sent one) and body decoding.

use hive_core::enums::Collection;

use crate::Row;
use crate::error::StoreError;

/// Error body PostgREST sends alongside a non-success status.
#[derive(serde::Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
    details: Option<String>,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`StoreError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`StoreError::Api`] with status code and the
///   backend's `message` (plus `details`), or the raw body.
pub async fn check_response(
    resp: reqwest::Response,
    collection: Collection,
) -> Result<reqwest::Response, StoreError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(StoreError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(StoreError::Api {
            collection,
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Decode a select response body. A JSON `null` body reads as `None`.
pub async fn decode_rows(resp: reqwest::Response) -> Result<Option<Vec<Row>>, StoreError> {
    let body = resp.text().await?;
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(PostgrestErrorBody {
            message: Some(message),
            details: Some(details),
        }) if !details.is_empty() => format!("{message} ({details})"),
        Ok(PostgrestErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => body.to_string(),
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
