//! REST gateway for the document-chat backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is a single request with no retry, backoff, or timeout. Failures
//! come back as `ApiError` so the session can decide how to degrade.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::Document;
use crate::config::ApiConfig;

/// Multipart field name the upload endpoint expects, repeated once per file.
pub const UPLOAD_FIELD: &str = "files";

fn documents_endpoint(config: &ApiConfig) -> String {
    config.url("/documents")
}

#[cfg(any(test, feature = "csr"))]
fn upload_endpoint(config: &ApiConfig) -> String {
    config.url("/documents/upload")
}

#[cfg(any(test, feature = "csr"))]
fn document_endpoint(config: &ApiConfig, document_id: &str) -> String {
    config.url(&format!("/documents/{}", urlencoding::encode(document_id)))
}

#[cfg(any(test, feature = "csr"))]
fn chat_endpoint(config: &ApiConfig) -> String {
    config.url("/chat")
}

/// Absolute URL of a stored upload, for linking to the original file.
pub fn file_url(config: &ApiConfig, file_path: &str) -> String {
    config.url(file_path)
}

#[cfg(feature = "csr")]
async fn read_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status { status, body }
}

/// Fetch all documents from `GET /documents`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a document array.
pub async fn list_documents(config: &ApiConfig) -> Result<Vec<Document>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&documents_endpoint(config))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(read_error(resp).await);
        }
        resp.json::<Vec<Document>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = documents_endpoint(config);
        Err(ApiError::Unavailable)
    }
}

/// Upload files as a multipart form via `POST /documents/upload`.
///
/// Returns the document records the backend created.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, the
/// server responds with a non-OK status, or the body is not a document array.
#[cfg(feature = "csr")]
pub async fn upload_documents(config: &ApiConfig, files: &[web_sys::File]) -> Result<Vec<Document>, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    for file in files {
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    }
    let resp = gloo_net::http::Request::post(&upload_endpoint(config))
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.json::<Vec<Document>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Delete a document via `DELETE /documents/{id}`.
///
/// The response status is not inspected; only transport faults are errors.
///
/// # Errors
///
/// Returns an error if the request could not be sent.
pub async fn delete_document(config: &ApiConfig, document_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        gloo_net::http::Request::delete(&document_endpoint(config, document_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, document_id);
        Err(ApiError::Unavailable)
    }
}

/// Ask a question about documents via `POST /chat`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with the response body text on a non-OK
/// status, or a transport/decode error.
pub async fn send_chat_message(config: &ApiConfig, text: &str, document_ids: &[String]) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::types::{ChatRequest, ChatResponse};

        let payload = ChatRequest { text, document_ids };
        let resp = gloo_net::http::Request::post(&chat_endpoint(config))
            .json(&payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(read_error(resp).await);
        }
        let body: ChatResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.response)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, text, document_ids);
        Err(ApiError::Unavailable)
    }
}
