//! Use cases (application services)

pub mod chat_session;
pub mod send_chat;
