//! Course Dashboard Server
//!
//! Run with: cargo run --bin course-dashboard [CONFIG]
//!
//! Loads the dashboard once at startup, then serves it over HTTP.
//!
//! # Configuration
//!
//! An optional TOML config path may be given as the first argument;
//! otherwise the default locations are searched. Environment variables
//! (`DASHBOARD_*`, see `config.rs`) override file settings, and `RUST_LOG`
//! overrides the log level.

use course_dashboard::api::{serve, AppState};
use course_dashboard::loader::source_from_config;
use course_dashboard::{logging, Config, Dashboard, Page};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::resolve(config_path.as_deref())?;

    logging::init(&config.logging);

    tracing::info!("Starting course dashboard v{}", env!("CARGO_PKG_VERSION"));

    let source = source_from_config(&config.data)?;
    tracing::info!("Data source: {}", source.describe());

    let dashboard = Arc::new(Dashboard::new(source, Page::new()));
    if let Some(loads) = dashboard.boot().await {
        if !loads.join().await {
            tracing::warn!("Some dashboard sections failed to load");
        }
    }

    if !dashboard.is_loaded().await {
        tracing::warn!("Course catalogue unavailable, serving the load error");
    }

    let mut state = AppState::new(Arc::clone(&dashboard));
    if let Some(dir) = &config.data.serve_dir {
        state = state.serve_dir(dir);
    }

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Course dashboard stopped");
    Ok(())
}
