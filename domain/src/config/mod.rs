//! Display settings shared by the config file, the CLI and the chat session.

mod output_format;

pub use output_format::OutputFormat;
