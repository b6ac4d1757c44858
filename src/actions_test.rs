#![cfg(not(feature = "csr"))]

use std::sync::Arc;

use super::*;
use crate::net::types::Document;
use crate::state::chat::Role;
use crate::state::session::{Activity, CHAT_ERROR_MESSAGE};
use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn doc(id: &str) -> Document {
    Document {
        id: id.to_owned(),
        name: format!("{id}.txt"),
        file_path: None,
        content_type: Some("text/plain".to_owned()),
        size: 64,
        embedding_status: None,
    }
}

fn session_with(ids: &[&str]) -> RwSignal<Session> {
    let session = RwSignal::new(Session::new(Arc::new(MemoryStorage::new())));
    let documents: Vec<Document> = ids.iter().map(|id| doc(id)).collect();
    session.update(|s| {
        s.documents_loaded(Ok(documents));
    });
    session
}

// =============================================================
// Gateway unavailable (native builds)
// =============================================================

#[test]
fn load_failure_leaves_session_idle_and_unchanged() {
    let session = session_with(&["a"]);
    load_documents(session, ApiConfig::default());
    session.with_untracked(|s| {
        assert_eq!(s.activity(), Activity::Idle);
        assert_eq!(s.documents.len(), 1);
        assert_eq!(s.selection.active(), Some("a"));
    });
}

#[test]
fn submit_with_failing_gateway_shows_query_then_apology() {
    let session = session_with(&["a"]);
    assert!(submit_query(session, ApiConfig::default(), "What is this about?"));
    session.with_untracked(|s| {
        let messages = s.active_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "What is this about?");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, CHAT_ERROR_MESSAGE);
        assert!(s.input_enabled());
    });
}

#[test]
fn blank_submit_is_refused() {
    let session = session_with(&["a"]);
    assert!(!submit_query(session, ApiConfig::default(), "  "));
    session.with_untracked(|s| assert!(s.active_messages().is_empty()));
}

#[test]
fn submit_without_documents_is_refused() {
    let session = session_with(&[]);
    assert!(!submit_query(session, ApiConfig::default(), "hello"));
}

#[test]
fn delete_with_failing_transport_keeps_document() {
    let session = session_with(&["a", "b"]);
    delete_document(session, ApiConfig::default(), "a".to_owned());
    session.with_untracked(|s| {
        assert_eq!(s.documents.len(), 2);
        assert_eq!(s.selection.active(), Some("a"));
    });
}
