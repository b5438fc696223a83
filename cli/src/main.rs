//! CLI entrypoint for LLM Switchboard
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use switchboard_application::{ChatSession, SendChatUseCase};
use switchboard_domain::{ModelId, OutputFormat};
use switchboard_infrastructure::{ConfigLoader, FileConfig, ModelCatalog, OllamaTransport};
use switchboard_presentation::{ChatRepl, Cli, ConsoleFormatter, ModelListing};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_guard = init_logging(cli.verbose, &config)?;

    info!("Starting LLM Switchboard");

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    // Load the model catalog, if one is configured
    let models_file = cli
        .models_file
        .clone()
        .or_else(|| config.chat.models_file.as_ref().map(PathBuf::from));
    let catalog = match &models_file {
        Some(path) if !path.as_os_str().is_empty() => ModelCatalog::load(path)?,
        _ => ModelCatalog::default(),
    };
    let listings: Vec<ModelListing> = catalog
        .entries()
        .iter()
        .map(|entry| ModelListing {
            model: entry.model.clone(),
            description: entry.description.clone(),
        })
        .collect();

    let model = resolve_model(&cli, &config, &catalog)?;

    if cli.list_models {
        print!("{}", ConsoleFormatter::model_list(&listings, model.as_ref()));
        return Ok(());
    }

    let Some(model) = model else {
        bail!(
            "No model selected. Pass --model, set chat.model in switchboard.toml, \
             or list models in a models file."
        );
    };
    if !catalog.is_empty() && !catalog.contains(&model) {
        warn!("Model {} is not listed in the model catalog", model);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let server_url = cli.server.as_deref().unwrap_or(&config.server.url);
    let transport = Arc::new(OllamaTransport::new(server_url, &config.server.chat_path)?);
    let use_case = SendChatUseCase::new(transport);
    let endpoint = use_case.endpoint().to_string();
    let mut session = ChatSession::new(use_case, model).with_format(format);

    // Single message mode
    if let Some(message) = cli.message.as_deref() {
        match session.ask(message).await {
            Ok(output) => print!("{}", ConsoleFormatter::reply(&output)),
            Err(e) => {
                eprint!("{}", ConsoleFormatter::error(&e, &endpoint));
                drop(log_guard);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    ChatRepl::new(session)
        .with_models(listings)
        .run(&endpoint)
        .await?;

    Ok(())
}

/// Initialize logging based on verbosity level, falling back to `logging.level`.
///
/// The returned guard flushes the log file when dropped.
fn init_logging(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => match config.logging.level.as_deref() {
            Some(level) => EnvFilter::try_new(level)
                .with_context(|| format!("Invalid logging.level: {}", level))?,
            None => EnvFilter::new("warn"),
        },
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match config.logging.file.as_deref() {
        Some(file) if !file.trim().is_empty() => {
            let path = Path::new(file);
            let name = path
                .file_name()
                .with_context(|| format!("Invalid logging.file: {}", file))?;
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Pick the model: command line, then config file, then the catalog's first entry.
fn resolve_model(
    cli: &Cli,
    config: &FileConfig,
    catalog: &ModelCatalog,
) -> Result<Option<ModelId>> {
    if let Some(name) = cli.model.as_deref() {
        return Ok(Some(name.parse::<ModelId>()?));
    }
    if let Some(parsed) = config.chat.parse_model() {
        return Ok(Some(parsed.context("Invalid chat.model in configuration")?));
    }
    Ok(catalog.default_model().cloned())
}
