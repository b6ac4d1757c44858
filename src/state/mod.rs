//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`documents`, `chat`, `selection`) and tied
//! together by `session`, which is the only type components hold in context.

pub mod chat;
pub mod documents;
pub mod selection;
pub mod session;
