//! # Course Dashboard
//!
//! Course catalogue dashboard: statistic widgets, filterable course cards
//! and a recent-enrollments table, rendered from two JSON documents
//! (`courses.json` and `students.json`).
//!
//! ## Modules
//!
//! - [`format`]: currency, number and date formatting
//! - [`model`]: records of the JSON documents
//! - [`store`]: active-course store and the search/category filter
//! - [`view`]: view-models and markup rendering
//! - [`page`]: element contract, ready state and page events
//! - [`loader`]: data sources (HTTP and directory)
//! - [`dashboard`]: the page controller tying it together
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use course_dashboard::{Dashboard, ElementId, FileDataSource, Page, PageEvent};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = Arc::new(FileDataSource::new("./data"));
//!     let dashboard = Arc::new(Dashboard::new(source, Page::new()));
//!
//!     // Runs the stats, courses and enrollments loaders concurrently
//!     if let Some(loads) = dashboard.boot().await {
//!         loads.join().await;
//!     }
//!
//!     // A keystroke in the search box re-filters the course list
//!     dashboard
//!         .dispatch(PageEvent::input(ElementId::CourseSearch, "go"))
//!         .await;
//!
//!     let page = dashboard.page().await;
//!     println!("{}", page.text(ElementId::CoursesList));
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod loader;
pub mod logging;
pub mod model;
pub mod page;
pub mod store;
pub mod view;

// Re-export top-level types for convenience
pub use dashboard::{Dashboard, LoadHandles};

pub use format::{format_currency, format_date, format_number, format_rating};

pub use model::{CatalogueDocument, Course, Enrollment, Stats, StatsDocument, StudentsDocument};

pub use store::{CategoryFilter, CourseFilter, CourseStore, FilterParams};

pub use page::{Content, ElementId, EventKind, Page, PageError, PageEvent, ReadyState};

pub use loader::{
    fetch_document, source_from_config, DataSource, FileDataSource, HttpDataSource, LoadError,
};

pub use view::{
    render_course_error, render_courses, render_document, render_enrollments, CourseCard,
    EnrollmentRow, ProgressTier, StatsView,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DataConfig, LoggingConfig};
