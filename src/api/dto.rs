//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use serde::Serialize;

use crate::model::Course;

/// Filtered course list
#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    /// Number of matching courses
    pub count: usize,
    /// Lower-cased search text that was applied
    pub search: String,
    /// Category that was applied ("all" for none)
    pub category: String,
    pub courses: Vec<Course>,
}

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Whether the course store has been loaded
    pub courses_loaded: bool,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Version string
    pub version: String,
}
