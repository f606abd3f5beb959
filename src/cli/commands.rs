//! CLI command implementations
//!
//! `run` parses arguments and dispatches to the matching command.

use std::path::Path;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::config::ServerConfig;
use crate::http::ApiServer;

/// Parse CLI arguments and dispatch
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config } => serve(&config).await,
    }
}

/// Boot the HTTP server and serve until interrupted
pub async fn serve(config_path: &Path) -> CliResult<()> {
    init_tracing();

    let config = ServerConfig::load(config_path)
        .map_err(|e| CliError::config(config_path, e.to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    let server = ApiServer::new(config, pool);
    server.start().await?;

    Ok(())
}

/// Install the global tracing subscriber, honoring RUST_LOG
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
