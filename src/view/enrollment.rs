//! Enrollment table rows

use crate::format::format_date;
use crate::model::Enrollment;
use askama::Template;

/// Placeholder shown when there are no recent enrollments
pub const NO_ENROLLMENTS_MESSAGE: &str = "No enrollments yet";

/// Columns of the enrollment table
const TABLE_COLUMNS: usize = 5;

/// Status badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "bg-success",
            BadgeTone::Warning => "bg-warning",
        }
    }
}

/// Display-ready fields of one enrollment row
#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "enrollment_row.html")]
pub struct EnrollmentRow {
    pub initial: String,
    pub student_name: String,
    pub email: String,
    pub course: String,
    pub enrolled_date: String,
    pub progress: String,
    pub status: String,
    pub tone: BadgeTone,
}

impl From<&Enrollment> for EnrollmentRow {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            initial: enrollment
                .student_name
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_default(),
            student_name: enrollment.student_name.clone(),
            email: enrollment.email.clone(),
            course: enrollment.course.clone(),
            enrolled_date: format_date(&enrollment.enrolled_date),
            progress: enrollment.progress.to_string(),
            status: enrollment.status.clone(),
            tone: if enrollment.is_active() {
                BadgeTone::Success
            } else {
                BadgeTone::Warning
            },
        }
    }
}

/// Table body: one row per enrollment, or a placeholder row
#[derive(Template)]
#[template(path = "enrollment_rows.html")]
struct EnrollmentRowsTemplate {
    rows: Vec<EnrollmentRow>,
    columns: usize,
    message: &'static str,
}

/// Render the enrollment table body
pub fn render_enrollments(enrollments: &[Enrollment]) -> Result<String, askama::Error> {
    EnrollmentRowsTemplate {
        rows: enrollments.iter().map(EnrollmentRow::from).collect(),
        columns: TABLE_COLUMNS,
        message: NO_ENROLLMENTS_MESSAGE,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment(name: &str, status: &str) -> Enrollment {
        Enrollment {
            student_name: name.to_string(),
            email: "priya@example.com".to_string(),
            course: "Data Science Fundamentals".to_string(),
            enrolled_date: "2024-02-20".to_string(),
            progress: 45.0,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_active_badge_is_success() {
        let row = EnrollmentRow::from(&enrollment("Priya", "active"));

        assert_eq!(row.tone, BadgeTone::Success);
        assert!(row
            .render()
            .unwrap()
            .contains(r#"<span class="badge bg-success">active</span>"#));
    }

    #[test]
    fn test_pending_badge_is_warning() {
        let row = EnrollmentRow::from(&enrollment("Priya", "pending"));

        assert_eq!(row.tone, BadgeTone::Warning);
        assert!(row
            .render()
            .unwrap()
            .contains(r#"<span class="badge bg-warning">pending</span>"#));
    }

    #[test]
    fn test_row_fields() {
        let row = EnrollmentRow::from(&enrollment("Éva", "active"));

        assert_eq!(row.initial, "É");
        assert_eq!(row.enrolled_date, "20 Feb 2024");
        assert_eq!(row.progress, "45");
    }

    #[test]
    fn test_row_escapes_text() {
        let mut hostile = enrollment("<img src=x onerror=alert(1)>", "<i>active</i>");
        hostile.course = "Tom & Jerry".to_string();
        let html = render_enrollments(&[hostile]).unwrap();

        assert!(!html.contains("<img"));
        assert!(!html.contains("<i>active</i>"));
        assert!(html.contains("&lt;img"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("badge bg-warning"));
    }

    #[test]
    fn test_empty_name_has_empty_initial() {
        assert_eq!(EnrollmentRow::from(&enrollment("", "active")).initial, "");
    }

    #[test]
    fn test_empty_placeholder_row() {
        let html = render_enrollments(&[]).unwrap();

        assert!(html.contains(NO_ENROLLMENTS_MESSAGE));
        assert!(html.contains(r#"colspan="5""#));
    }

    #[test]
    fn test_one_row_per_enrollment() {
        let html = render_enrollments(&[
            enrollment("Priya", "active"),
            enrollment("Arjun", "pending"),
        ])
        .unwrap();

        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(!html.contains(NO_ENROLLMENTS_MESSAGE));
    }
}
