//! Chat configuration from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};
use switchboard_domain::ModelId;

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model to chat with when none is given on the command line
    pub model: Option<String>,
    /// JSON file listing selectable models
    pub models_file: Option<String>,
}

impl FileChatConfig {
    /// Parse the configured model, if any.
    ///
    /// `None` when unset; `Some(Err(..))` when set but blank.
    pub fn parse_model(&self) -> Option<Result<ModelId, switchboard_domain::DomainError>> {
        self.model.as_deref().map(str::parse)
    }
}
