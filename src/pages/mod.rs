//! Top-level page components.

pub mod document_chat;
