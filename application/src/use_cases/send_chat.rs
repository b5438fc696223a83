//! Send Chat use case.
//!
//! Streams one assistant reply from the model server and assembles it into
//! a single message:
//!
//! 1. Append the user turn to the history (always, even if the request fails)
//! 2. Open a streaming request carrying the whole history
//! 3. Split the body into lines, decode each one, skip the undecodable ones
//! 4. Concatenate content until the first chunk flagged `done`
//! 5. Return the trimmed text and record it as the assistant turn

use crate::ports::chat_transport::{ChatRequest, ChatTransport, TransportError};
use futures::StreamExt;
use std::sync::Arc;
use switchboard_domain::util::log_preview;
use switchboard_domain::{
    AssembleError, AssemblyState, ConversationHistory, DecodeResult, LineBuffer,
    MessageAssembler, ModelId, decode_line,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced to the caller of [`SendChatUseCase::send`].
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("No valid response message")]
    EmptyResponse,
}

impl From<AssembleError> for ChatError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::EmptyResponse => ChatError::EmptyResponse,
        }
    }
}

/// Use case that assembles one streamed reply.
///
/// Holds no conversation state of its own: the history is passed in by the
/// session that owns it. One call at a time per history; the `&mut` borrow
/// makes overlapping requests on the same history impossible.
#[derive(Clone)]
pub struct SendChatUseCase {
    transport: Arc<dyn ChatTransport>,
}

impl SendChatUseCase {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self { transport }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Send `user_message` to `model` and return the assembled reply text.
    ///
    /// The user turn is appended to `history` before the request is made and
    /// stays there whatever the outcome. On success the reply is appended as
    /// an assistant turn.
    pub async fn send(
        &self,
        history: &mut ConversationHistory,
        user_message: &str,
        model: &ModelId,
    ) -> Result<String, ChatError> {
        history.push_user(user_message);

        info!(
            "Sending chat request to {} (model: {}, turns: {}): {}",
            self.transport.endpoint(),
            model,
            history.len(),
            log_preview(user_message, 100)
        );

        let request = ChatRequest::new(model, history.turns());
        let mut body = self.transport.open_chat(&request).await.map_err(|e| {
            warn!("Chat request failed: {}", e);
            e
        })?;

        let mut lines = LineBuffer::new();
        let mut assembler = MessageAssembler::new();
        let mut skipped = 0usize;

        'body: while let Some(delivery) = body.next().await {
            let bytes = delivery.map_err(|e| {
                warn!("Chat stream interrupted: {}", e);
                e
            })?;
            lines.extend(&bytes);
            for result in lines.decoded() {
                if fold(&mut assembler, result, &mut skipped).is_done() {
                    break 'body;
                }
            }
        }

        // A final line without a trailing newline only shows up at stream end
        if !assembler.state().is_done()
            && let Some(tail) = lines.finish()
        {
            fold(&mut assembler, decode_line(&tail), &mut skipped);
        }

        debug!(
            "Stream finished: {} fragments, {} skipped lines, done flag seen: {}",
            assembler.fragments(),
            skipped,
            assembler.state().is_done()
        );

        let text = assembler.finish().map_err(|e| {
            warn!("Model returned no usable content ({} lines skipped)", skipped);
            ChatError::from(e)
        })?;

        history.push_assistant(text.clone());
        info!("Received reply: {}", log_preview(&text, 100));
        Ok(text)
    }
}

fn fold(
    assembler: &mut MessageAssembler,
    result: DecodeResult,
    skipped: &mut usize,
) -> AssemblyState {
    match result {
        DecodeResult::Chunk(chunk) => assembler.push(chunk),
        DecodeResult::Skip(err) => {
            *skipped += 1;
            debug!("Skipping stream line: {}", err);
            assembler.state()
        }
    }
}
