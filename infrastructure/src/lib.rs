//! Infrastructure layer for llm-switchboard
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod ollama;

// Re-export commonly used types
pub use catalog::{CatalogEntry, CatalogError, ModelCatalog};
pub use config::{
    ConfigLoader, ConfigValidationError, FileChatConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileServerConfig,
};
pub use ollama::transport::{DEFAULT_CHAT_PATH, DEFAULT_SERVER_URL, OllamaTransport};
