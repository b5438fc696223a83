//! Console output formatter for chat replies and status lines

use colored::Colorize;
use switchboard_application::{ChatError, TransportError};
use switchboard_domain::ModelId;

/// A model offered for selection, with its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelListing {
    pub model: ModelId,
    pub description: String,
}

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a reply. The markup itself is passed through untouched.
    pub fn reply(markup: &str) -> String {
        format!("{}\n", markup)
    }

    /// Format a failed request, with a hint for the common causes
    pub fn error(error: &ChatError, endpoint: &str) -> String {
        let mut output = format!("{} {}\n", "Error:".red().bold(), error);
        match error {
            ChatError::Transport(TransportError::ConnectionError(_)) => {
                output.push_str(&format!(
                    "{} is the model server running at {}?\n",
                    "hint:".dimmed(),
                    endpoint
                ));
            }
            ChatError::Transport(TransportError::HttpStatus { status: 404, .. }) => {
                output.push_str(&format!(
                    "{} check that the model is installed on the server\n",
                    "hint:".dimmed()
                ));
            }
            ChatError::EmptyResponse => {
                output.push_str(&format!(
                    "{} the server closed the stream without any message content\n",
                    "hint:".dimmed()
                ));
            }
            _ => {}
        }
        output
    }

    /// Format the model list, marking the current model
    pub fn model_list(models: &[ModelListing], current: Option<&ModelId>) -> String {
        if models.is_empty() {
            return format!("{}\n", "No models listed (set chat.models_file)".dimmed());
        }

        let mut output = format!("{}\n", "Models:".cyan().bold());
        for listing in models {
            let marker = if Some(&listing.model) == current {
                "*"
            } else {
                " "
            };
            if listing.description.is_empty() {
                output.push_str(&format!("  {} {}\n", marker, listing.model));
            } else {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    marker,
                    listing.model,
                    format!("- {}", listing.description).dimmed()
                ));
            }
        }
        output
    }
}
