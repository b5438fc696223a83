//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use switchboard_domain::OutputFormat;

// Re-export OutputFormat from domain for convenience
pub use switchboard_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
}
