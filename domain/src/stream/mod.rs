//! Streamed chat response handling.
//!
//! - [`lines::LineBuffer`]: reassembles lines from raw body deliveries
//! - [`chunk::decode_line`]: decodes one line into a [`chunk::DecodeResult`]
//! - [`assembler::MessageAssembler`]: folds decoded chunks into the final text

pub mod assembler;
pub mod chunk;
pub mod lines;
