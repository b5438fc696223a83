//! Decoding of individual stream lines.
//!
//! The chat endpoint streams one JSON object per line:
//!
//! ```text
//! {"model":"llama3.2","message":{"role":"assistant","content":"Hel"},"done":false}
//! {"model":"llama3.2","message":{"role":"assistant","content":"lo"},"done":false}
//! {"model":"llama3.2","message":{"role":"assistant","content":""},"done":true}
//! ```
//!
//! Each line is decoded on its own. A line that is not valid JSON, or that is
//! missing `message.content`, yields [`DecodeResult::Skip`] instead of an
//! error so the caller can keep folding the lines that follow.

use serde::Deserialize;
use thiserror::Error;

/// Maximum number of raw bytes kept in a [`ChunkDecodeError`] for diagnostics.
const MAX_RAW_PREVIEW: usize = 200;

/// One decoded unit of a streamed chat response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamChunk {
    /// Message content fragment carried by this line.
    pub content: String,
    /// Whether the server marked the message as complete.
    pub done: bool,
}

impl StreamChunk {
    pub fn new(content: impl Into<String>, done: bool) -> Self {
        Self {
            content: content.into(),
            done,
        }
    }
}

/// A stream line that could not be decoded into a [`StreamChunk`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to decode stream chunk: {reason}\nRaw line: {raw}")]
pub struct ChunkDecodeError {
    pub reason: String,
    pub raw: String,
}

/// Result of decoding one line: either a chunk to fold or a line to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    Chunk(StreamChunk),
    Skip(ChunkDecodeError),
}

impl DecodeResult {
    /// Returns the chunk if decoding succeeded.
    pub fn chunk(self) -> Option<StreamChunk> {
        match self {
            DecodeResult::Chunk(chunk) => Some(chunk),
            DecodeResult::Skip(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct WireChunk {
    message: WireMessage,
    #[serde(default)]
    done: bool,
}

#[derive(Deserialize)]
struct WireMessage {
    content: String,
}

/// Decode a single line of the response body.
pub fn decode_line(line: &str) -> DecodeResult {
    match serde_json::from_str::<WireChunk>(line.trim()) {
        Ok(wire) => DecodeResult::Chunk(StreamChunk {
            content: wire.message.content,
            done: wire.done,
        }),
        Err(e) => DecodeResult::Skip(ChunkDecodeError {
            reason: e.to_string(),
            raw: crate::util::truncate_str(line, MAX_RAW_PREVIEW).to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_content_fragment() {
        let line = r#"{"model":"llama3.2","message":{"role":"assistant","content":"Hel"},"done":false}"#;
        assert_eq!(
            decode_line(line),
            DecodeResult::Chunk(StreamChunk::new("Hel", false))
        );
    }

    #[test]
    fn test_decodes_terminal_chunk() {
        let line = r#"{"message":{"role":"assistant","content":""},"done":true,"total_duration":123}"#;
        assert_eq!(decode_line(line), DecodeResult::Chunk(StreamChunk::new("", true)));
    }

    #[test]
    fn test_missing_done_defaults_to_false() {
        let line = r#"{"message":{"content":"x"}}"#;
        assert_eq!(decode_line(line).chunk(), Some(StreamChunk::new("x", false)));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let line = "  {\"message\":{\"content\":\"a\"},\"done\":false}\r";
        assert_eq!(decode_line(line).chunk(), Some(StreamChunk::new("a", false)));
    }

    #[test]
    fn test_truncated_json_is_skipped() {
        let line = r#"{"message":{"role":"assistant","con"#;
        match decode_line(line) {
            DecodeResult::Skip(err) => assert_eq!(err.raw, line),
            other => panic!("expected skip, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_is_skipped() {
        // Error objects from the server lack `message`
        assert!(matches!(
            decode_line(r#"{"error":"model 'nope' not found"}"#),
            DecodeResult::Skip(_)
        ));
        assert!(matches!(
            decode_line(r#"{"message":{"role":"assistant"},"done":false}"#),
            DecodeResult::Skip(_)
        ));
    }

    #[test]
    fn test_empty_line_is_skipped() {
        assert!(decode_line("").chunk().is_none());
    }

    #[test]
    fn test_raw_preview_is_bounded() {
        let line = "x".repeat(1000);
        match decode_line(&line) {
            DecodeResult::Skip(err) => assert_eq!(err.raw.len(), MAX_RAW_PREVIEW),
            other => panic!("expected skip, got {:?}", other),
        }
    }
}
