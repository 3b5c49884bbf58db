//! Claims Dashboard - Server Binary
//!
//! Loads the claims CSV once and serves the dashboard over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (reads ./hospital_data.csv, port 8501)
//! cargo run --bin claims-dashboard
//!
//! # Run with environment variables
//! DASHBOARD_DATA_PATH=/data/claims.csv DASHBOARD_PORT=8080 cargo run --bin claims-dashboard
//! ```
//!
//! # Environment Variables
//!
//! * `DASHBOARD_HOST` - Server host (default: 0.0.0.0)
//! * `DASHBOARD_PORT` - Server port (default: 8501)
//! * `DASHBOARD_DATA_PATH` - Claims CSV path (default: hospital_data.csv)
//! * `DASHBOARD_DEFAULT_HOSPITAL_COUNT` - Hospitals pre-selected on first visit (default: 5)
//! * `DASHBOARD_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use infra_data::DatasetCache;
use interface_api::{config::ApiConfig, create_router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the dashboard server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The dataset cannot be loaded
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let (config, config_error) = match ApiConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (ApiConfig::default(), Some(e)),
    };

    init_tracing(&config.log_level);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Invalid environment configuration, using defaults");
    }
    config.validate()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_path = %config.data_path,
        "Starting claims dashboard"
    );

    let cache = DatasetCache::new(&config.data_path);
    let dataset = cache.get_or_load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load dataset");
        e
    })?;

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = create_router(dataset, config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
