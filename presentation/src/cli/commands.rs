//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assistant replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML markup rendered from the reply's markdown
    Html,
    /// The reply text exactly as assembled
    Raw,
}

impl From<OutputFormat> for switchboard_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => switchboard_domain::OutputFormat::Html,
            OutputFormat::Raw => switchboard_domain::OutputFormat::Raw,
        }
    }
}

/// CLI arguments for llm-switchboard
#[derive(Parser, Debug)]
#[command(name = "llm-switchboard")]
#[command(author, version, about = "Chat with a locally hosted language model")]
#[command(long_about = r#"
llm-switchboard streams replies from a local Ollama-compatible model server
and prints them as HTML markup (code blocks with copy buttons, headings,
lists, bold and inline code).

With a MESSAGE it sends one message and exits; without one it starts an
interactive chat that keeps the conversation for the whole session.

Configuration files are loaded from (in priority order):
1. SWITCHBOARD_* environment variables (e.g. SWITCHBOARD_CHAT__MODEL)
2. --config <path>       Explicit config file
3. ./switchboard.toml    Project-level config
4. ~/.config/llm-switchboard/config.toml   Global config

Example:
  llm-switchboard -m llama3.2 "Write a binary search in Rust"
  llm-switchboard -m qwen2.5-coder:7b --output raw "Explain lifetimes"
  llm-switchboard --server http://gpu-box:11434
"#)]
pub struct Cli {
    /// Message to send (starts an interactive chat when omitted)
    pub message: Option<String>,

    /// Model to chat with
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the model server
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// JSON file listing selectable models
    #[arg(long, value_name = "PATH")]
    pub models_file: Option<PathBuf>,

    /// List the models from the models file and exit
    #[arg(long)]
    pub list_models: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
