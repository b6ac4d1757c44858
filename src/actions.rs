//! User intents that reach the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each action takes the session signal, opens the matching transition on
//! [`Session`], issues exactly one gateway call, and feeds the outcome back.
//! In the browser the call runs on the event loop via `spawn_local`; native
//! builds drive it to completion inline, where the gateway stubs fail fast.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api;
use crate::state::session::Session;

fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(task);
    }
    #[cfg(not(feature = "csr"))]
    {
        futures::executor::block_on(task);
    }
}

/// Fetch the document list and restore saved chats and selection.
pub fn load_documents(session: RwSignal<Session>, config: ApiConfig) {
    if !session.try_update(Session::begin_loading).unwrap_or(false) {
        return;
    }
    spawn(async move {
        let result = api::list_documents(&config).await;
        session.update(|s| {
            s.documents_loaded(result);
            leptos::logging::log!("{} documents known", s.documents.len());
        });
    });
}

/// Upload picked files and merge whatever the backend creates.
#[cfg(feature = "csr")]
pub fn upload_files(session: RwSignal<Session>, config: ApiConfig, files: Vec<web_sys::File>) {
    if files.is_empty() || !session.try_update(Session::begin_upload).unwrap_or(false) {
        return;
    }
    spawn(async move {
        let result = api::upload_documents(&config, &files).await;
        session.update(|s| {
            s.upload_finished(result);
        });
    });
}

/// Delete a document and drop it locally once the request completes.
pub fn delete_document(session: RwSignal<Session>, config: ApiConfig, document_id: String) {
    spawn(async move {
        let result = api::delete_document(&config, &document_id).await;
        session.update(|s| {
            s.document_deleted(&document_id, result);
        });
    });
}

/// Send a chat query about the active document.
///
/// Returns `false` if the query was refused (blank, nothing selected, or a
/// request already in flight).
pub fn submit_query(session: RwSignal<Session>, config: ApiConfig, query: &str) -> bool {
    let Some(turn) = session.try_update(|s| s.begin_turn(query)).flatten() else {
        return false;
    };
    spawn(async move {
        let result = api::send_chat_message(&config, &turn.text, &turn.document_ids()).await;
        session.update(|s| s.finish_turn(turn, result));
    });
    true
}
