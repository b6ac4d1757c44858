//! Active-document selection and its `localStorage` record.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::fmt;

use crate::state::documents::DocumentStore;
use crate::util::storage::SharedStorage;

pub const ACTIVE_DOCUMENT_STORAGE_KEY: &str = "activeDocumentId";

/// Which document the chat pane is bound to, if any.
#[derive(Clone)]
pub struct SelectionState {
    active: Option<String>,
    storage: SharedStorage,
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState").field("active", &self.active).finish_non_exhaustive()
    }
}

impl SelectionState {
    pub fn new(storage: SharedStorage) -> Self {
        Self { active: None, storage }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, document_id: &str) -> bool {
        self.active.as_deref() == Some(document_id)
    }

    /// Make `document_id` active and record it.
    pub fn set(&mut self, document_id: &str) {
        self.active = Some(document_id.to_owned());
        self.storage.set_item(ACTIVE_DOCUMENT_STORAGE_KEY, document_id);
    }

    /// Drop the selection and its record.
    pub fn clear(&mut self) {
        self.active = None;
        self.storage.remove_item(ACTIVE_DOCUMENT_STORAGE_KEY);
    }

    /// Pick the selection after a fresh document listing.
    ///
    /// The saved id wins if the backend still knows it; otherwise the first
    /// document is selected; otherwise nothing is.
    pub fn restore(&mut self, documents: &DocumentStore) {
        if let Some(saved) = self.saved_id().filter(|id| documents.contains(id)) {
            self.set(&saved);
            return;
        }
        match documents.first() {
            Some(first) => {
                let id = first.id.clone();
                self.set(&id);
            }
            None => self.clear(),
        }
    }

    /// Move off a document that was just deleted.
    ///
    /// `remaining` must already exclude the deleted document. A selection on
    /// some other document is left alone.
    pub fn reassign_after_delete(&mut self, deleted_id: &str, remaining: &DocumentStore) {
        if !self.is_active(deleted_id) {
            return;
        }
        match remaining.first() {
            Some(first) => {
                let id = first.id.clone();
                self.set(&id);
            }
            None => self.clear(),
        }
    }

    /// Saved id, accepting both the plain form and a JSON-quoted string.
    fn saved_id(&self) -> Option<String> {
        let raw = self.storage.get_item(ACTIVE_DOCUMENT_STORAGE_KEY)?;
        let id = serde_json::from_str::<String>(&raw).unwrap_or(raw);
        (!id.is_empty()).then_some(id)
    }
}
