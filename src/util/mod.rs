//! Helpers the state and view layers lean on.
//!
//! `storage` is the persistence port behind saved chats and selection,
//! `clock` stamps messages, `upload` filters picked files, `format` builds chip
//! tooltips, and `markdown` renders assistant replies.

pub mod clock;
pub mod format;
pub mod markdown;
pub mod storage;
pub mod upload;
