//! Almanac server entry point.
//!
//! Boots the read-only dataset API: loads configuration from the
//! environment, reads the three JSON datasets into memory, and serves
//! the Axum router until a shutdown signal arrives. A missing or
//! malformed dataset aborts startup with exit code 1 before the
//! listener binds, so the API never comes up partially loaded.

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use almanac_api::{start_server, AppState, ServerConfig};
use almanac_data::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::AlmanacError;

/// Directory holding the three dataset files, relative to the process
/// working directory.
const DATA_DIR: &str = "data";

/// Application entry point.
///
/// Initializes logging, loads configuration and datasets, then serves
/// HTTP until `SIGINT` or `SIGTERM` is received.
///
/// # Errors
///
/// Returns an error (process exit code 1) if configuration is invalid,
/// a dataset fails to load, or the server cannot bind its port.
#[tokio::main]
async fn main() -> Result<(), AlmanacError> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("almanac-server starting");

    // Load configuration from environment
    let config = AppConfig::from_env()?;
    info!(port = config.port, "configuration loaded");

    // Load the datasets; any failure aborts before the listener binds
    let catalog = Catalog::load_from_dir(Path::new(DATA_DIR))?;
    info!(
        characters = catalog.character_count(),
        episodes = catalog.episode_count(),
        quotes = catalog.quote_count(),
        "datasets loaded"
    );

    // Serve until a shutdown signal arrives
    let state = Arc::new(AppState::new(catalog));
    let server_config = ServerConfig {
        port: config.port,
        ..ServerConfig::default()
    };
    start_server(&server_config, state).await?;

    info!("almanac-server stopped");

    Ok(())
}
