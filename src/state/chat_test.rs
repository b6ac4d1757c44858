use std::sync::Arc;

use super::*;
use crate::net::types::Document;
use crate::util::storage::{KeyValueStore, MemoryStorage};

// =============================================================
// Helpers
// =============================================================

fn doc(id: &str) -> Document {
    Document {
        id: id.to_owned(),
        name: format!("{id}.txt"),
        file_path: None,
        content_type: Some("text/plain".to_owned()),
        size: 12,
        embedding_status: None,
    }
}

fn documents(ids: &[&str]) -> DocumentStore {
    let mut store = DocumentStore::default();
    store.replace(ids.iter().map(|id| doc(id)).collect());
    store
}

fn store_with_memory() -> (ChatHistoryStore, Arc<MemoryStorage>) {
    let memory = Arc::new(MemoryStorage::new());
    (ChatHistoryStore::new(memory.clone()), memory)
}

fn saved_map(memory: &MemoryStorage) -> Option<ChatMap> {
    memory
        .get_item(CHATS_STORAGE_KEY)
        .map(|raw| serde_json::from_str(&raw).expect("saved chats should be valid JSON"))
}

// =============================================================
// Message serde
// =============================================================

#[test]
fn message_serializes_lowercase_role() {
    let value = serde_json::to_value(Message::user("hi", 5)).expect("message should serialize");
    assert_eq!(value, serde_json::json!({"role": "user", "content": "hi", "timestamp": 5}));
}

#[test]
fn message_without_timestamp_defaults_to_zero() {
    let parsed: Message =
        serde_json::from_str(r#"{"role":"assistant","content":"hello"}"#).expect("message should parse");
    assert_eq!(parsed, Message::assistant("hello", 0));
}

#[test]
fn message_rejects_unknown_role() {
    assert!(serde_json::from_str::<Message>(r#"{"role":"system","content":"x"}"#).is_err());
}

// =============================================================
// append / ensure / remove
// =============================================================

#[test]
fn append_creates_transcript_and_persists() {
    let (mut history, memory) = store_with_memory();
    history.append("a", Message::user("q1", 1));
    history.append("a", Message::assistant("r1", 2));

    assert_eq!(history.messages("a"), &[Message::user("q1", 1), Message::assistant("r1", 2)]);
    assert_eq!(saved_map(&memory).as_ref(), Some(history.entries()));
}

#[test]
fn messages_for_unknown_document_is_empty() {
    let (history, _) = store_with_memory();
    assert!(history.messages("missing").is_empty());
}

#[test]
fn ensure_creates_empty_transcript_once() {
    let (mut history, memory) = store_with_memory();
    history.append("a", Message::user("q", 1));
    history.ensure("a");
    history.ensure("b");

    assert_eq!(history.messages("a").len(), 1);
    assert!(history.contains("b"));
    assert!(history.messages("b").is_empty());
    let saved = saved_map(&memory).expect("map should be saved");
    assert_eq!(saved.len(), 2);
}

#[test]
fn remove_persists_even_when_map_becomes_empty() {
    let (mut history, memory) = store_with_memory();
    history.append("a", Message::user("q", 1));
    history.remove("a");

    assert!(history.is_empty());
    assert_eq!(saved_map(&memory), Some(ChatMap::new()));
}

// =============================================================
// load
// =============================================================

#[test]
fn load_without_saved_state_is_empty_and_writes_nothing() {
    let (mut history, memory) = store_with_memory();
    history.load(&documents(&["a"]));
    assert!(history.is_empty());
    assert!(memory.is_empty());
}

#[test]
fn load_with_malformed_saved_state_is_empty() {
    let (mut history, memory) = store_with_memory();
    memory.set_item(CHATS_STORAGE_KEY, "{\"a\": [oops");
    history.load(&documents(&["a"]));
    assert!(history.is_empty());
}

#[test]
fn persist_then_load_with_same_documents_is_identity() {
    let (mut first, memory) = store_with_memory();
    first.append("a", Message::user("q", 1));
    first.append("a", Message::assistant("r", 2));
    first.append("b", Message::user("other", 3));

    let mut reloaded = ChatHistoryStore::new(memory.clone());
    reloaded.load(&documents(&["a", "b"]));
    assert_eq!(reloaded.entries(), first.entries());
}

#[test]
fn load_prunes_entries_for_unknown_documents_and_writes_back() {
    let (mut first, memory) = store_with_memory();
    first.append("a", Message::user("keep", 1));
    first.append("gone", Message::user("drop", 2));

    let mut reloaded = ChatHistoryStore::new(memory.clone());
    reloaded.load(&documents(&["a", "c"]));

    let keys: Vec<&str> = reloaded.entries().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a"]);
    assert_eq!(saved_map(&memory).as_ref(), Some(reloaded.entries()));
}

#[test]
fn load_writes_back_empty_map_when_everything_pruned() {
    let (mut first, memory) = store_with_memory();
    first.append("gone", Message::user("drop", 1));

    let mut reloaded = ChatHistoryStore::new(memory.clone());
    reloaded.load(&documents(&[]));
    assert!(reloaded.is_empty());
    assert_eq!(saved_map(&memory), Some(ChatMap::new()));
}

#[test]
fn load_replaces_in_memory_entries() {
    let (mut history, memory) = store_with_memory();
    memory.set_item(CHATS_STORAGE_KEY, r#"{"a":[{"role":"user","content":"saved","timestamp":9}]}"#);
    history.entries.insert("scratch".to_owned(), Vec::new());
    history.load(&documents(&["a", "scratch"]));
    assert_eq!(history.messages("a"), &[Message::user("saved", 9)]);
    assert!(!history.contains("scratch"));
}
