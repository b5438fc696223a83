//! Configuration file loading for llm-switchboard
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SWITCHBOARD_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./switchboard.toml` or `./.switchboard.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/llm-switchboard/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileServerConfig,
};
pub use loader::ConfigLoader;
