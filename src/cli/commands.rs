//! CLI command implementations
//!
//! Both commands resolve configuration the same way: JSON file (or defaults),
//! then command-line overrides, then validation.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, ServerConfig};
use crate::store::seed::seed_if_empty;
use crate::store::SqliteStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse CLI arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init {
            config,
            database_url,
            seed,
        } => {
            let config = resolve_config(config.as_deref(), database_url, None)?;
            init(&config, seed)
        }
        Command::Start {
            config,
            database_url,
            port,
        } => {
            let config = resolve_config(config.as_deref(), database_url, port)?;
            start(config)
        }
    }
}

/// Load the config file (or defaults) and apply command-line overrides
pub fn resolve_config(
    path: Option<&Path>,
    database_url: Option<String>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(url) = database_url {
        config.database_url = url;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the config.
fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // Already installed when called twice in one process
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Create the tables and optionally seed sample data
pub fn init(config: &ServerConfig, seed: bool) -> CliResult<()> {
    init_logging(config);

    runtime()?.block_on(async {
        let store = SqliteStore::connect(&config.database_url).await?;
        info!(database_url = %config.database_url, "tables ready");

        if seed {
            let inserted = seed_if_empty(&store).await?;
            info!(questions = inserted, "seed finished");
        }
        Ok::<(), CliError>(())
    })
}

/// Open the store and serve the API until interrupted
pub fn start(config: ServerConfig) -> CliResult<()> {
    init_logging(&config);

    runtime()?.block_on(async {
        let store = SqliteStore::connect(&config.database_url).await?;
        let server = HttpServer::new(config, Arc::new(store));

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
