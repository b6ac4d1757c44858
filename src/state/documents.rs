//! Known-document inventory.
//!
//! DESIGN
//! ======
//! The backend list is authoritative. `replace` installs a fresh listing,
//! `add` merges upload results, and `remove` applies a local delete. Nothing
//! here talks to the network; failed calls simply never reach these methods.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::types::Document;

/// In-memory list of documents in backend order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentStore {
    items: Vec<Document>,
}

impl DocumentStore {
    pub fn items(&self) -> &[Document] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.items.iter().find(|doc| doc.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&Document> {
        self.items.first()
    }

    /// Replace the whole set with a fresh backend listing.
    pub fn replace(&mut self, documents: Vec<Document>) {
        self.items = documents;
    }

    /// Append uploaded documents, skipping ids already present.
    ///
    /// Returns the documents that were actually added.
    pub fn add(&mut self, documents: Vec<Document>) -> Vec<Document> {
        let mut added = Vec::new();
        for doc in documents {
            if self.contains(&doc.id) {
                continue;
            }
            self.items.push(doc.clone());
            added.push(doc);
        }
        added
    }

    /// Remove a document; returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|doc| doc.id != id);
        self.items.len() != before
    }
}
