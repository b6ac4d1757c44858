//! Session state for the document chat page.
//!
//! DESIGN
//! ======
//! The session owns the three stores plus a single activity gate. Every
//! transition is synchronous: actions start a request through one of the
//! `begin_*` methods, await the gateway, and hand the outcome back to the
//! matching completion method. This keeps the interaction rules in one place
//! and testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Gateway failures are logged and leave state untouched, except chat
//! failures, which become [`CHAT_ERROR_MESSAGE`] in the transcript. Uploads
//! and deletes are applied optimistically with no rollback.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::Document;
use crate::state::chat::{ChatHistoryStore, Message};
use crate::state::documents::DocumentStore;
use crate::state::selection::SelectionState;
use crate::util::clock::now_ms;
use crate::util::storage::SharedStorage;

/// Assistant message shown in place of a failed chat reply.
pub const CHAT_ERROR_MESSAGE: &str = "Sorry, there was an error processing your request.";

/// Outstanding request, if any. Only one may be in flight at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Activity {
    #[default]
    Idle,
    /// Initial document listing.
    Loading,
    Uploading,
    /// Chat request sent, waiting for the assistant.
    Pending,
}

impl Activity {
    /// Transcript indicator while a request is in flight.
    pub fn indicator_text(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Loading => Some("Loading documents..."),
            Self::Uploading => Some("Uploading..."),
            Self::Pending => Some("Processing..."),
        }
    }
}

/// A chat request that has been recorded locally and must be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    /// Document that was active when the query was submitted.
    pub document_id: String,
    pub text: String,
}

impl PendingTurn {
    /// Ids to send in the chat request body.
    pub fn document_ids(&self) -> Vec<String> {
        vec![self.document_id.clone()]
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    pub documents: DocumentStore,
    pub history: ChatHistoryStore,
    pub selection: SelectionState,
    activity: Activity,
}

impl Session {
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            documents: DocumentStore::default(),
            history: ChatHistoryStore::new(storage.clone()),
            selection: SelectionState::new(storage),
            activity: Activity::Idle,
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    /// Transcript of the active document; empty when nothing is selected.
    pub fn active_messages(&self) -> &[Message] {
        self.selection
            .active()
            .map(|id| self.history.messages(id))
            .unwrap_or_default()
    }

    /// Whether the message form accepts input.
    pub fn input_enabled(&self) -> bool {
        !self.is_busy() && self.selection.active().is_some()
    }

    fn begin(&mut self, activity: Activity) -> bool {
        if self.is_busy() {
            return false;
        }
        self.activity = activity;
        true
    }

    // =========================================================================
    // DOCUMENT LISTING
    // =========================================================================

    /// Mark the initial listing as in flight. Returns `false` if busy.
    pub fn begin_loading(&mut self) -> bool {
        self.begin(Activity::Loading)
    }

    /// Apply the result of `GET /documents`.
    ///
    /// On success the listing replaces the store, saved transcripts are pruned
    /// to it, and the selection is restored. On failure nothing changes and
    /// saved state is left untouched. Returns the fetched list (empty on
    /// failure).
    pub fn documents_loaded(&mut self, result: Result<Vec<Document>, ApiError>) -> Vec<Document> {
        if self.activity == Activity::Loading {
            self.activity = Activity::Idle;
        }
        match result {
            Ok(documents) => {
                self.documents.replace(documents.clone());
                self.history.load(&self.documents);
                self.selection.restore(&self.documents);
                documents
            }
            Err(e) => {
                leptos::logging::warn!("failed to load documents: {e}");
                Vec::new()
            }
        }
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Make a known document active. Unknown ids are ignored.
    pub fn select(&mut self, document_id: &str) -> bool {
        if !self.documents.contains(document_id) {
            return false;
        }
        self.selection.set(document_id);
        true
    }

    // =========================================================================
    // UPLOAD / DELETE
    // =========================================================================

    /// Mark an upload as in flight. Returns `false` if busy.
    pub fn begin_upload(&mut self) -> bool {
        self.begin(Activity::Uploading)
    }

    /// Apply the result of `POST /documents/upload`.
    ///
    /// Whatever the backend returned is merged in; each new document gets an
    /// empty transcript; with nothing selected the first new document becomes
    /// active. Returns the documents added.
    pub fn upload_finished(&mut self, result: Result<Vec<Document>, ApiError>) -> Vec<Document> {
        if self.activity == Activity::Uploading {
            self.activity = Activity::Idle;
        }
        let uploaded = match result {
            Ok(uploaded) => uploaded,
            Err(e) => {
                leptos::logging::warn!("upload failed: {e}");
                return Vec::new();
            }
        };
        let added = self.documents.add(uploaded);
        for doc in &added {
            self.history.ensure(&doc.id);
        }
        if self.selection.active().is_none() {
            if let Some(first) = added.first() {
                self.selection.set(&first.id);
            }
        }
        added
    }

    /// Apply the result of `DELETE /documents/{id}`.
    ///
    /// Any response counts as success; only a transport fault keeps the
    /// document. Removes the transcript and moves the selection off it.
    pub fn document_deleted(&mut self, document_id: &str, result: Result<(), ApiError>) -> bool {
        if let Err(e) = result {
            leptos::logging::warn!("delete failed for {document_id}: {e}");
            return false;
        }
        let removed = self.documents.remove(document_id);
        self.history.remove(document_id);
        self.selection.reassign_after_delete(document_id, &self.documents);
        removed
    }

    // =========================================================================
    // CHAT TURN
    // =========================================================================

    /// Record a user query and open a chat turn.
    ///
    /// Returns `None` (and records nothing) when the query is blank, nothing
    /// is selected, or another request is in flight.
    pub fn begin_turn(&mut self, query: &str) -> Option<PendingTurn> {
        if query.trim().is_empty() || self.is_busy() {
            return None;
        }
        let document_id = self.selection.active()?.to_owned();
        self.history.append(&document_id, Message::user(query, now_ms()));
        self.activity = Activity::Pending;
        Some(PendingTurn { document_id, text: query.to_owned() })
    }

    /// Close a chat turn with the gateway outcome.
    ///
    /// The reply goes to the document that was active at submission. If that
    /// document was deleted meanwhile, the reply is dropped.
    pub fn finish_turn(&mut self, turn: PendingTurn, result: Result<String, ApiError>) {
        if self.activity == Activity::Pending {
            self.activity = Activity::Idle;
        }
        let content = match result {
            Ok(reply) => reply,
            Err(e) => {
                leptos::logging::warn!("chat failed: {e}");
                CHAT_ERROR_MESSAGE.to_owned()
            }
        };
        if !self.documents.contains(&turn.document_id) {
            leptos::logging::warn!("dropping reply for deleted document {}", turn.document_id);
            return;
        }
        self.history.append(&turn.document_id, Message::assistant(content, now_ms()));
    }
}
