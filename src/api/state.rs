//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::dashboard::Dashboard;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The dashboard session loaded at startup
    pub dashboard: Arc<Dashboard>,
    /// Directory exposed at `/data`, if any
    pub serve_dir: Option<PathBuf>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self {
            dashboard,
            serve_dir: None,
            start_time: Instant::now(),
        }
    }

    /// Builder method: expose a directory of JSON documents at `/data`
    pub fn serve_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.serve_dir = Some(dir.into());
        self
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
