//! Wire DTOs for the document-chat backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's snake_case JSON so serde needs no
//! renames. Optional fields default when absent because older backend builds
//! omit `file_path` and `embedding_status`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A document record as returned by `GET /documents` and `POST /documents/upload`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Backend-assigned identifier (UUID string).
    pub id: String,
    /// Original upload file name.
    pub name: String,
    /// Path of the stored upload relative to the backend root (`/uploads/...`).
    #[serde(default)]
    pub file_path: Option<String>,
    /// MIME type guessed by the backend; `null` when it could not tell.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Size of the upload in bytes.
    pub size: u64,
    /// Backend indexing status, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_status: Option<String>,
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub text: &'a str,
    pub document_ids: &'a [String],
}

/// Response of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// FastAPI error body (`{"detail": "..."}`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}
