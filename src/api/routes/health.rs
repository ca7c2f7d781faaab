//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// "degraded" while the course catalogue is not loaded.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let courses_loaded = state.dashboard.is_loaded().await;

    let status = if courses_loaded { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        courses_loaded,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
