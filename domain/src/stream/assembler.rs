//! Folding decoded chunks into one assembled message.

use super::chunk::StreamChunk;
use thiserror::Error;

/// Errors produced when finalizing an assembled message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    #[error("No valid response message")]
    EmptyResponse,
}

/// Whether the assembler is still accepting chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    Pending,
    Done,
}

impl AssemblyState {
    pub fn is_done(self) -> bool {
        matches!(self, AssemblyState::Done)
    }
}

/// Accumulator for one in-flight response.
///
/// Content is appended in arrival order until the first chunk flagged
/// `done`; anything pushed after that is ignored.
#[derive(Debug, Default)]
pub struct MessageAssembler {
    buffer: String,
    fragments: usize,
    done: bool,
}

impl MessageAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one chunk into the message.
    pub fn push(&mut self, chunk: StreamChunk) -> AssemblyState {
        if self.done {
            return AssemblyState::Done;
        }
        self.buffer.push_str(&chunk.content);
        self.fragments += 1;
        if chunk.done {
            self.done = true;
            AssemblyState::Done
        } else {
            AssemblyState::Pending
        }
    }

    pub fn state(&self) -> AssemblyState {
        if self.done {
            AssemblyState::Done
        } else {
            AssemblyState::Pending
        }
    }

    /// Number of chunks folded so far (including the terminal one).
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Text accumulated so far, untrimmed.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Finalize the message, returning the trimmed text.
    ///
    /// Called either after the terminal chunk or when the stream ended
    /// without one; both finalize the same way.
    pub fn finish(self) -> Result<String, AssembleError> {
        let text = self.buffer.trim();
        if text.is_empty() {
            return Err(AssembleError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
