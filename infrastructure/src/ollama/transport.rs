//! HTTP transport for an Ollama-compatible `/api/chat` endpoint.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Url};
use switchboard_application::{BodyStream, ChatRequest, ChatTransport, TransportError};
use tracing::debug;

/// Default address of a locally running model server
pub const DEFAULT_SERVER_URL: &str = "http://localhost:11434";

/// Default path of the streaming chat endpoint
pub const DEFAULT_CHAT_PATH: &str = "/api/chat";

/// Chat transport backed by `reqwest`.
///
/// No timeout is configured: a reply streams for as long as the model keeps
/// generating, and giving up is left to the caller.
pub struct OllamaTransport {
    client: Client,
    url: Url,
    endpoint: String,
}

impl OllamaTransport {
    /// Create a transport for `server_url` joined with `chat_path`.
    ///
    /// `chat_path` is appended to the server URL's own path, so a server
    /// behind a path prefix (`http://host/proxy`) keeps that prefix.
    pub fn new(server_url: &str, chat_path: &str) -> Result<Self, TransportError> {
        let joined = format!(
            "{}/{}",
            server_url.trim_end_matches('/'),
            chat_path.trim_start_matches('/')
        );
        let url = Url::parse(&joined).map_err(|e| {
            TransportError::InvalidRequest(format!("invalid server URL '{}': {}", joined, e))
        })?;
        Ok(Self {
            client: Client::new(),
            endpoint: url.to_string(),
            url,
        })
    }

    /// Transport for the default local server.
    pub fn local() -> Result<Self, TransportError> {
        Self::new(DEFAULT_SERVER_URL, DEFAULT_CHAT_PATH)
    }
}

#[async_trait]
impl ChatTransport for OllamaTransport {
    async fn open_chat(&self, request: &ChatRequest<'_>) -> Result<BodyStream, TransportError> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        debug!("POST {} ({} bytes)", self.url, payload.len());

        let response = self
            .client
            .post(self.url.clone())
            .header("Content-Type", "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| TransportError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body: server_error_message(&body),
            });
        }

        let body = response
            .bytes_stream()
            .map(|delivery| {
                delivery
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| TransportError::BodyError(e.to_string()))
            })
            .boxed();
        Ok(body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Pull the `error` field out of a JSON error body, falling back to the raw text.
fn server_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
