//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod chat;
mod logging;
mod output;
mod server;

pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.url cannot be empty")]
    EmptyServerUrl,

    #[error("server.chat_path cannot be empty")]
    EmptyChatPath,

    #[error("chat.model cannot be empty")]
    EmptyModelName,

    #[error("chat.models_file cannot be empty")]
    EmptyModelsFile,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model server settings
    pub server: FileServerConfig,
    /// Chat settings
    pub chat: FileChatConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.server.url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyServerUrl);
        }
        if self.server.chat_path.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyChatPath);
        }
        if matches!(self.chat.parse_model(), Some(Err(_))) {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self
            .chat
            .models_file
            .as_deref()
            .is_some_and(|f| f.trim().is_empty())
        {
            issues.push(ConfigValidationError::EmptyModelsFile);
        }

        issues
    }
}
