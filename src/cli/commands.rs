//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::storage::{load_seed, InMemoryPlayerStore};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Write a default configuration file, refusing to overwrite one
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(config_path.to_path_buf()));
    }

    if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let content = serde_json::to_string_pretty(&Config::default())?;
    fs::write(config_path, content)?;

    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

/// Build the store from the configured seed
pub fn build_store(config: &Config) -> CliResult<InMemoryPlayerStore> {
    let players = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => Vec::new(),
    };
    let seeded = players.len();

    let store = InMemoryPlayerStore::with_players(players)?;
    tracing::info!(players = seeded, "player store ready");
    Ok(store)
}

/// Start the HTTP server
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    init_logging(config.log_filter.as_deref());
    if !config_path.exists() {
        tracing::info!(
            "No config at {}, using defaults",
            config_path.display()
        );
    }

    let store = build_store(&config)?;
    let server = HttpServer::new(config.server.clone(), store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
