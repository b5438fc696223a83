//! Reassembly of newline-delimited lines from arbitrary byte deliveries.
//!
//! The transport hands over the body in whatever pieces the network produced,
//! so a JSON object (or a multi-byte UTF-8 character) may be split across two
//! deliveries. [`LineBuffer`] holds the unterminated tail until the rest
//! arrives.

use super::chunk::{DecodeResult, decode_line};

#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
    /// Bytes of `pending` already handed out as lines.
    consumed: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one delivery of body bytes.
    ///
    /// Lines handed out since the previous delivery are dropped here, once,
    /// instead of on every [`next_line`](Self::next_line).
    pub fn extend(&mut self, bytes: &[u8]) {
        if self.consumed > 0 {
            self.pending.drain(..self.consumed);
            self.consumed = 0;
        }
        self.pending.extend_from_slice(bytes);
    }

    /// Pop the next complete, non-blank line.
    pub fn next_line(&mut self) -> Option<String> {
        loop {
            let rest = &self.pending[self.consumed..];
            let pos = rest.iter().position(|&b| b == b'\n')?;
            let line = String::from_utf8_lossy(&rest[..pos]).into_owned();
            self.consumed += pos + 1;
            if !line.trim().is_empty() {
                return Some(line);
            }
        }
    }

    /// Lazily decode every complete line currently buffered.
    pub fn decoded(&mut self) -> impl Iterator<Item = DecodeResult> + '_ {
        std::iter::from_fn(move || self.next_line().map(|line| decode_line(&line)))
    }

    /// Take the unterminated remainder once the stream has ended.
    pub fn finish(&mut self) -> Option<String> {
        let raw = std::mem::take(&mut self.pending);
        let tail = &raw[std::mem::take(&mut self.consumed)..];
        let line = String::from_utf8_lossy(tail);
        if line.trim().is_empty() {
            None
        } else {
            Some(line.into_owned())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.consumed >= self.pending.len()
    }
}
