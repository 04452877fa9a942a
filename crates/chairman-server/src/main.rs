//! Seat-status server binary for the Chairman service.
//!
//! Wires the seat store to the HTTP gateway and runs until interrupted.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `chairman-config.yaml` (or `CHAIRMAN_CONFIG`)
//! 3. Build the seat store from the configured seat list
//! 4. Serve `GET /api/seats` until Ctrl-C or SIGTERM

mod config;
mod error;

use std::path::PathBuf;
use std::sync::Arc;

use chairman_gateway::AppState;
use chairman_store::SeatStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ChairmanConfig;
use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "chairman-config.yaml";

/// Environment variable naming an alternative configuration file.
const CONFIG_PATH_ENV: &str = "CHAIRMAN_CONFIG";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, store construction, or the server
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("chairman-server starting");

    run().await?;

    info!("chairman-server shutdown complete");
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let config = load_config()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        seats = config.seats.len(),
        "Configuration loaded"
    );

    let store = Arc::new(SeatStore::from_records(&config.seats)?);
    info!(seat_count = store.len().await, "Seat store initialized");

    let state = Arc::new(AppState::new(store));
    chairman_gateway::start_server(&config.server, state, shutdown_signal()).await?;

    Ok(())
}

/// Load configuration from `CHAIRMAN_CONFIG` or `chairman-config.yaml`.
///
/// A missing file is not an error: defaults are used. Environment
/// overrides apply in both cases.
fn load_config() -> Result<ChairmanConfig, AppError> {
    let path = std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if path.exists() {
        info!(path = %path.display(), "Loading config file");
        Ok(ChairmanConfig::from_file(&path)?)
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        let mut config = ChairmanConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }
}

/// Resolve when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
