//! Frames API Server
//!
//! Ingests the startup scanline file into SQLite, then serves range
//! listings and false-color renders over HTTP.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use frames_api::config::FramesConfig;
use frames_api::pipeline::run_startup_ingest;
use frames_api::state::AppState;
use storage::{FrameStore, SqliteFrameStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = FramesConfig::parse();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Starting frames API server");

    let widths = config.widths()?;
    let addr = config.listen_addr()?;

    let store: Arc<dyn FrameStore> = Arc::new(
        SqliteFrameStore::connect(&config.database_url, config.table.clone())
            .await
            .context("Failed to open frame store")?,
    );
    info!(database = %config.database_url, table = %config.table, "Opened frame store");

    let summary = run_startup_ingest(&config.source, widths, store.as_ref())
        .await
        .with_context(|| format!("Startup ingest of {} failed", config.source.display()))?;
    info!(rows = summary.rows, width = summary.width, "Startup ingest complete");

    let state = Arc::new(AppState::new(Arc::clone(&store)).with_prometheus(prometheus_handle));
    let app = frames_api::build_router(state);

    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Frame store closed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
