//! Interactive chat module
//!
//! Provides a readline-based chat loop that keeps one conversation per session.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
