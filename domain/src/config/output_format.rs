//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished assistant message is handed to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered through the markup pipeline (default)
    #[default]
    Html,
    /// The assembled message text as received
    Raw,
}

impl OutputFormat {
    /// Produce the display string for a finalized message.
    pub fn apply(self, message: &str) -> String {
        match self {
            OutputFormat::Html => crate::markup::render(message),
            OutputFormat::Raw => message.to_string(),
        }
    }
}
