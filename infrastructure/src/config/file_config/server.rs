//! Model server configuration from TOML (`[server]` section)

use crate::ollama::transport::{DEFAULT_CHAT_PATH, DEFAULT_SERVER_URL};
use serde::{Deserialize, Serialize};

/// Raw model server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Base URL of the model server
    pub url: String,
    /// Path of the streaming chat endpoint
    pub chat_path: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
        }
    }
}
