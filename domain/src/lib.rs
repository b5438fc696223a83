//! Domain layer for llm-switchboard
//!
//! This crate contains the core logic of the chat pipeline and has no
//! dependencies on networking, configuration or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Stream assembly
//!
//! The model server answers with one JSON object per line. Lines are
//! reassembled from raw deliveries ([`LineBuffer`]), decoded one at a time
//! ([`decode_line`]) and folded into a single message ([`MessageAssembler`])
//! until a chunk flagged `done` arrives.
//!
//! ## Markup
//!
//! [`render`] turns the finished message into HTML through a fixed, ordered
//! list of rewrite passes ([`RULES`]).

pub mod config;
pub mod conversation;
pub mod core;
pub mod markup;
pub mod stream;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use conversation::entities::{ConversationHistory, Role, Turn};
pub use core::{error::DomainError, model::ModelId};
pub use markup::{RULES, Rule, RuleKind, Shelf, escape_html, render};
pub use stream::{
    assembler::{AssembleError, AssemblyState, MessageAssembler},
    chunk::{ChunkDecodeError, DecodeResult, StreamChunk, decode_line},
    lines::LineBuffer,
};
