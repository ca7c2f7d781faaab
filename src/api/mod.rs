//! Dashboard HTTP server
//!
//! Serves the dashboard built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Dashboard document (`?search=&category=` filters the course list)
//! - `GET /fragments/courses` - Course list markup for a filter
//!
//! ## API
//! - `GET /api/v1/courses` - Filtered active courses as JSON
//! - `GET /api/v1/categories` - Distinct course categories
//!
//! ## Data
//! - `GET /data/*` - JSON documents from the configured directory, if any
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use course_dashboard::api::{serve, AppState};
//! use course_dashboard::{ApiConfig, Dashboard, FileDataSource, Page};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Arc::new(Dashboard::new(Arc::new(FileDataSource::new("./data")), Page::new()));
//!     if let Some(loads) = dashboard.boot().await {
//!         loads.join().await;
//!     }
//!
//!     let config = ApiConfig::default();
//!     serve(AppState::new(dashboard), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/courses", get(routes::courses::list_courses))
        .route("/categories", get(routes::courses::list_categories));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let serve_dir = state.serve_dir.clone();
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/fragments/courses", get(routes::dashboard::courses_fragment))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes);

    if let Some(dir) = serve_dir {
        tracing::info!("Serving data documents from {:?} at /data", dir);
        router = router.nest_service("/data", ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Course dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Course dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::loader::FileDataSource;
    use crate::page::Page;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const CARD_MARKER: &str = r#"class="card h-100""#;

    const COURSES_JSON: &str = r#"{
        "stats": {"totalCourses": 2, "activeStudents": 1200, "avgRating": 4.7, "totalRevenue": 150000},
        "courses": [
            {"title": "Intro to Go", "instructor": "Asha", "category": "tech", "level": "Beginner",
             "rating": 4.5, "price": 2999, "capacity": 50, "enrolled": 40, "completion": 80,
             "duration": "6 weeks", "startDate": "2024-01-15", "status": "active"},
            {"title": "Yoga Basics", "instructor": "Mia", "category": "wellness", "level": "Beginner",
             "rating": 4.9, "price": 999, "capacity": 30, "enrolled": 12, "completion": 30,
             "duration": "4 weeks", "startDate": "2024-02-01", "status": "active"}
        ]
    }"#;

    const STUDENTS_JSON: &str = r#"{"recentEnrollments": []}"#;

    async fn create_test_app(with_courses: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_courses {
            std::fs::write(dir.path().join("courses.json"), COURSES_JSON).unwrap();
        }
        std::fs::write(dir.path().join("students.json"), STUDENTS_JSON).unwrap();

        let source = Arc::new(FileDataSource::new(dir.path()));
        let dashboard = Arc::new(Dashboard::new(source, Page::new()));
        dashboard.boot().await.unwrap().join().await;

        let state = AppState::new(dashboard).serve_dir(dir.path());
        (build_router(state), dir)
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(true).await;
        let (status, _) = get_body(app, "/health/live").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_reports_degraded_without_courses() {
        let (app, _dir) = create_test_app(false).await;
        let (status, body) = get_body(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""status":"degraded""#));
    }

    #[tokio::test]
    async fn test_index_renders_dashboard() {
        let (app, _dir) = create_test_app(true).await;
        let (status, body) = get_body(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="totalCourses">2<"#));
        assert!(body.contains("₹1,50,000"));
        assert_eq!(body.matches(CARD_MARKER).count(), 2);
        assert!(body.contains("No enrollments yet"));
    }

    #[tokio::test]
    async fn test_index_applies_filter() {
        let (app, _dir) = create_test_app(true).await;
        let (_, body) = get_body(app, "/?search=GO&category=all").await;

        assert_eq!(body.matches(CARD_MARKER).count(), 1);
        assert!(body.contains("Intro to Go"));
        assert!(body.contains(r#"value="GO""#));
    }

    #[tokio::test]
    async fn test_index_escapes_query_text() {
        let (app, _dir) = create_test_app(true).await;
        let (status, body) =
            get_body(app, "/?search=%22%3E%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<script>"));
        assert!(!body.contains(r#"value="">"#));
        assert!(body.contains("&lt;script&gt;"));
        assert!(body.contains("No courses found"));
    }

    #[tokio::test]
    async fn test_index_shows_load_failure() {
        let (app, _dir) = create_test_app(false).await;
        let (_, body) = get_body(app, "/").await;

        assert!(body.contains("Failed to load courses"));
    }

    #[tokio::test]
    async fn test_courses_fragment() {
        let (app, _dir) = create_test_app(true).await;
        let (status, body) = get_body(app, "/fragments/courses?category=wellness").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches(CARD_MARKER).count(), 1);
        assert!(body.contains("Yoga Basics"));
        assert!(!body.contains("<html"));
    }

    #[tokio::test]
    async fn test_courses_fragment_no_match() {
        let (app, _dir) = create_test_app(true).await;
        let (_, body) = get_body(app, "/fragments/courses?search=rust").await;

        assert!(body.contains("No courses found"));
    }

    #[tokio::test]
    async fn test_courses_json() {
        let (app, _dir) = create_test_app(true).await;
        let (status, body) = get_body(app, "/api/v1/courses?search=mia").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["courses"][0]["title"], "Yoga Basics");
        assert_eq!(json["category"], "all");
    }

    #[tokio::test]
    async fn test_courses_json_unavailable_without_load() {
        let (app, _dir) = create_test_app(false).await;
        let (status, _) = get_body(app, "/api/v1/courses").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_categories() {
        let (app, _dir) = create_test_app(true).await;
        let (_, body) = get_body(app, "/api/v1/categories").await;

        assert_eq!(body, r#"["tech","wellness"]"#);
    }

    #[tokio::test]
    async fn test_serves_data_documents() {
        let (app, _dir) = create_test_app(true).await;
        let (status, body) = get_body(app, "/data/students.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, STUDENTS_JSON);
    }
}
