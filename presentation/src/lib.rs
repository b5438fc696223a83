//! Presentation layer for llm-switchboard
//!
//! This crate contains CLI definitions, console output formatting,
//! and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::{ConsoleFormatter, ModelListing};
