//! Roster lookup server binary.
//!
//! Wires configuration, logging, the shared `PostgreSQL` pool and the
//! HTTP API together, then serves until `Ctrl-C` or `SIGTERM`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `roster-config.yaml` (or `ROSTER_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Connect the `PostgreSQL` pool, optionally applying migrations
//! 4. Build one roster per department over the shared pool
//! 5. Serve the lookup API
//! 6. Close the pool once the server has drained

mod config;
mod error;

use std::path::PathBuf;
use std::sync::Arc;

use roster_api::{AppState, ServerConfig};
use roster_db::{PostgresConfig, PostgresPool};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_CONFIG_PATH, LogFormat, LoggingConfig, RosterConfig};
use crate::error::StartupError;

/// Application entry point for the roster lookup server.
///
/// # Errors
///
/// Returns an error if configuration, database setup or serving fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), StartupError> {
    // 1. Load configuration.
    let (config, config_path) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("roster-server starting");
    match &config_path {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        max_connections = config.database.max_connections,
        run_migrations = config.database.run_migrations,
        "Effective configuration"
    );

    // 3. Connect to PostgreSQL.
    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections)
        .with_connect_timeout(config.database.connect_timeout())
        .with_idle_timeout(config.database.idle_timeout());
    let pool = PostgresPool::connect(&pg_config).await?;

    if config.database.run_migrations {
        pool.run_migrations().await?;
        info!("Roster schema migrations applied");
    }

    // 4. Build department rosters over the shared pool.
    let state = Arc::new(AppState::new(pool.seattle(), pool.tacoma()));

    // 5. Serve until shutdown.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let served = roster_api::start_server(&server_config, state).await;

    // 6. Release connections whether or not serving succeeded.
    pool.close().await;
    served?;

    info!("roster-server shutdown complete");
    Ok(())
}

/// Load configuration from `ROSTER_CONFIG`, falling back to
/// `roster-config.yaml` in the working directory.
///
/// A missing file is not an error: defaults plus environment overrides
/// are used instead. Returns the path that was read, if any.
fn load_config() -> Result<(RosterConfig, Option<PathBuf>), StartupError> {
    let path = std::env::var_os("ROSTER_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = RosterConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((RosterConfig::from_env()?, None))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
