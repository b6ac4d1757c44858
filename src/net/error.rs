//! Gateway error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is caught at the action that triggered the request and
//! logged; callers degrade to a no-op or, for chat, to the apology message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorDetail;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{}", status_failed_message(*status, body))]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("invalid request: {0}")]
    Encode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Pull a readable message out of an error body.
///
/// FastAPI wraps errors as `{"detail": ...}`; anything else is returned
/// trimmed as-is.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(ErrorDetail { detail: serde_json::Value::String(text) }) => text,
        Ok(ErrorDetail { detail }) => detail.to_string(),
        Err(_) => body.trim().to_owned(),
    }
}

fn status_failed_message(status: u16, body: &str) -> String {
    let detail = error_detail(body);
    if detail.is_empty() {
        format!("request failed: {status}")
    } else {
        format!("request failed: {status}: {detail}")
    }
}
