//! Dashboard Views
//!
//! Records are first mapped to view-models (plain structs holding the
//! already-formatted display strings), then rendered to markup by askama
//! templates from `templates/`, which escape every interpolated value.
//! Nothing here touches the page.
//!
//! - [`course`]: course cards and the course list
//! - [`enrollment`]: enrollment table rows
//! - [`stats`]: the four stat widgets
//! - [`document`]: the full dashboard document

pub mod course;
pub mod document;
pub mod enrollment;
pub mod stats;

pub use course::{render_course_error, render_courses, CourseCard, ProgressTier};
pub use document::render_document;
pub use enrollment::{render_enrollments, BadgeTone, EnrollmentRow};
pub use stats::StatsView;
