//! Application layer for llm-switchboard
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::chat_transport::{BodyStream, ChatRequest, ChatTransport, TransportError};
pub use use_cases::chat_session::ChatSession;
pub use use_cases::send_chat::{ChatError, SendChatUseCase};
