//! Conversation domain.
//!
//! - [`entities::ConversationHistory`]: ordered turns replayed on every request
//! - [`entities::Turn`]: a single role-tagged message

pub mod entities;
