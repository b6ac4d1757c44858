//! Reusable UI components for the document chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session and API config from context and dispatch user
//! intents through `actions`, so none of them own state beyond form input.

pub mod chat_transcript;
pub mod document_chips;
pub mod message_form;
pub mod upload_button;
