//! Per-document chat transcripts and their `localStorage` mirror.
//!
//! DESIGN
//! ======
//! The in-memory map is the source of truth for the session. Every mutation
//! writes the whole map back under [`CHATS_STORAGE_KEY`]; there are no deltas
//! and no debouncing. On load the saved map is pruned to the documents the
//! backend still knows about, and the pruned map is written back.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::documents::DocumentStore;
use crate::util::storage::{SharedStorage, load_json, save_json};

pub const CHATS_STORAGE_KEY: &str = "documentChats";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Epoch milliseconds; absent in transcripts saved before timestamps existed.
    #[serde(default)]
    pub timestamp: i64,
}

impl Message {
    pub fn user(content: impl Into<String>, timestamp: i64) -> Self {
        Self { role: Role::User, content: content.into(), timestamp }
    }

    pub fn assistant(content: impl Into<String>, timestamp: i64) -> Self {
        Self { role: Role::Assistant, content: content.into(), timestamp }
    }
}

/// Document id to ordered transcript.
pub type ChatMap = BTreeMap<String, Vec<Message>>;

/// Chat history for all known documents.
#[derive(Clone)]
pub struct ChatHistoryStore {
    entries: ChatMap,
    storage: SharedStorage,
}

impl fmt::Debug for ChatHistoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatHistoryStore").field("entries", &self.entries).finish_non_exhaustive()
    }
}

impl ChatHistoryStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self { entries: ChatMap::new(), storage }
    }

    pub fn contains(&self, document_id: &str) -> bool {
        self.entries.contains_key(document_id)
    }

    /// Transcript for a document; empty when none exists.
    pub fn messages(&self, document_id: &str) -> &[Message] {
        self.entries.get(document_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Read the saved map, keep only entries for `documents`, and write the
    /// pruned map back.
    ///
    /// Absent or malformed saved state loads as an empty map.
    pub fn load(&mut self, documents: &DocumentStore) {
        let Some(saved) = load_json::<ChatMap>(self.storage.as_ref(), CHATS_STORAGE_KEY) else {
            self.entries.clear();
            return;
        };
        let before = saved.len();
        self.entries = saved
            .into_iter()
            .filter(|(id, _)| documents.contains(id))
            .collect();
        let pruned = before - self.entries.len();
        if pruned > 0 {
            leptos::logging::log!("pruned {pruned} chat histories for deleted documents");
        }
        save_json(self.storage.as_ref(), CHATS_STORAGE_KEY, &self.entries);
    }

    /// Append a message to a document's transcript, creating it if absent.
    pub fn append(&mut self, document_id: &str, message: Message) {
        self.entries.entry(document_id.to_owned()).or_default().push(message);
        self.persist();
    }

    /// Create an empty transcript for a document that has none.
    pub fn ensure(&mut self, document_id: &str) {
        if self.contains(document_id) {
            return;
        }
        self.entries.insert(document_id.to_owned(), Vec::new());
        self.persist();
    }

    /// Drop a document's transcript.
    ///
    /// Always writes, even when the map becomes empty, so the removed
    /// transcript cannot come back on reload.
    pub fn remove(&mut self, document_id: &str) {
        self.entries.remove(document_id);
        save_json(self.storage.as_ref(), CHATS_STORAGE_KEY, &self.entries);
    }

    fn persist(&self) {
        if self.entries.is_empty() {
            return;
        }
        save_json(self.storage.as_ref(), CHATS_STORAGE_KEY, &self.entries);
    }
}

#[cfg(test)]
impl ChatHistoryStore {
    pub fn entries(&self) -> &ChatMap {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
