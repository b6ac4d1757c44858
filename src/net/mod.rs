//! Networking modules for the document-chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the four REST calls, `error` classifies their failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
