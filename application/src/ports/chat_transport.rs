//! Chat transport port
//!
//! Defines how the application layer reaches the model server's chat
//! endpoint. The port only opens the exchange and hands back the raw body;
//! line splitting, decoding and assembly stay in the use case.

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::Serialize;
use switchboard_domain::{ModelId, Turn};
use thiserror::Error;

/// Errors raised by the transport while opening or reading a chat exchange
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to read response body: {0}")]
    BodyError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Response body as an ordered stream of byte deliveries.
///
/// Deliveries carry no framing guarantee: a JSON line may be split across
/// two of them, or several lines may arrive in one.
pub type BodyStream = BoxStream<'static, Result<Vec<u8>, TransportError>>;

/// Request body sent to the chat endpoint.
///
/// `messages` is the complete conversation so far; the server keeps no
/// state between requests.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a ModelId,
    pub messages: &'a [Turn],
    pub stream: bool,
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a ModelId, messages: &'a [Turn]) -> Self {
        Self {
            model,
            messages,
            stream: true,
        }
    }
}

/// Transport to the model server
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Issue one streaming chat request and return its body.
    async fn open_chat(&self, request: &ChatRequest<'_>) -> Result<BodyStream, TransportError>;

    /// Human-readable address of the endpoint, for logs and banners.
    fn endpoint(&self) -> &str;
}
