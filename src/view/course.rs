//! Course cards
//!
//! One card per course with level badge, rating, progress bar, seat usage,
//! price and schedule.

use crate::format::{format_currency, format_date};
use crate::model::Course;
use askama::Template;

/// Placeholder shown when a course list is empty
pub const NO_COURSES_MESSAGE: &str = "No courses found";

/// Inline message shown when the course document cannot be loaded
pub const COURSES_LOAD_FAILED: &str = "Failed to load courses";

/// Progress bar color tier, chosen from the completion percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    /// Completion above 70
    Success,
    /// Completion above 40, up to and including 70
    Warning,
    /// Completion of 40 or less
    Info,
}

impl ProgressTier {
    pub fn from_completion(completion: f64) -> Self {
        if completion > 70.0 {
            ProgressTier::Success
        } else if completion > 40.0 {
            ProgressTier::Warning
        } else {
            ProgressTier::Info
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProgressTier::Success => "bg-success",
            ProgressTier::Warning => "bg-warning",
            ProgressTier::Info => "bg-info",
        }
    }
}

/// Display-ready fields of one course card
#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "course_card.html")]
pub struct CourseCard {
    pub level: String,
    pub rating: String,
    pub title: String,
    pub instructor: String,
    pub progress: ProgressTier,
    pub completion: String,
    pub enrolled: u32,
    pub capacity: u32,
    pub price: String,
    pub duration: String,
    pub start_date: String,
}

impl From<&Course> for CourseCard {
    fn from(course: &Course) -> Self {
        Self {
            level: course.level.clone(),
            rating: course.rating.to_string(),
            title: course.title.clone(),
            instructor: course.instructor.clone(),
            progress: ProgressTier::from_completion(course.completion),
            completion: course.completion.to_string(),
            enrolled: course.enrolled,
            capacity: course.capacity,
            price: format_currency(course.price),
            duration: course.duration.clone(),
            start_date: format_date(&course.start_date),
        }
    }
}

/// The course grid, or a single centered message when there are no cards
#[derive(Template)]
#[template(path = "course_list.html")]
struct CourseListTemplate {
    cards: Vec<CourseCard>,
    tone: &'static str,
    message: &'static str,
}

/// Render the course list markup
///
/// An empty input yields the "No courses found" placeholder. Status is not
/// inspected here; inactive courses are dropped when the store is loaded.
pub fn render_courses<'a>(
    courses: impl IntoIterator<Item = &'a Course>,
) -> Result<String, askama::Error> {
    CourseListTemplate {
        cards: courses.into_iter().map(CourseCard::from).collect(),
        tone: "text-muted",
        message: NO_COURSES_MESSAGE,
    }
    .render()
}

/// Markup for the course list when loading failed
pub fn render_course_error() -> Result<String, askama::Error> {
    CourseListTemplate {
        cards: Vec::new(),
        tone: "text-danger",
        message: COURSES_LOAD_FAILED,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_MARKER: &str = r#"class="card h-100""#;

    fn course(title: &str, completion: f64) -> Course {
        Course::new(title, "Asha", "tech")
            .completion(completion)
            .level("Advanced")
            .rating(4.5)
            .price(4999.0)
            .seats(87, 100)
            .schedule("8 weeks", "2024-01-15")
    }

    #[test]
    fn test_empty_list_placeholder() {
        let empty: Vec<Course> = Vec::new();
        let html = render_courses(&empty).unwrap();

        assert!(html.contains(NO_COURSES_MESSAGE));
        assert!(!html.contains(CARD_MARKER));
    }

    #[test]
    fn test_one_card_per_course() {
        let courses = vec![course("A", 10.0), course("B", 50.0), course("C", 90.0)];
        let html = render_courses(&courses).unwrap();

        assert_eq!(html.matches(CARD_MARKER).count(), 3);
        assert!(!html.contains(NO_COURSES_MESSAGE));
    }

    #[test]
    fn test_renderer_does_not_filter_status() {
        let courses = vec![course("A", 10.0).status("inactive")];
        assert_eq!(render_courses(&courses).unwrap().matches(CARD_MARKER).count(), 1);
    }

    #[test]
    fn test_progress_tier_boundaries() {
        assert_eq!(ProgressTier::from_completion(71.0), ProgressTier::Success);
        assert_eq!(ProgressTier::from_completion(70.0), ProgressTier::Warning);
        assert_eq!(ProgressTier::from_completion(41.0), ProgressTier::Warning);
        assert_eq!(ProgressTier::from_completion(40.0), ProgressTier::Info);
        assert_eq!(ProgressTier::from_completion(0.0), ProgressTier::Info);
        assert_eq!(ProgressTier::from_completion(70.5), ProgressTier::Success);
    }

    #[test]
    fn test_card_fields() {
        let card = CourseCard::from(&course("Intro to Go", 75.0));

        assert_eq!(card.rating, "4.5");
        assert_eq!(card.completion, "75");
        assert_eq!((card.enrolled, card.capacity), (87, 100));
        assert_eq!(card.price, "₹4,999");
        assert_eq!(card.start_date, "15 Jan 2024");
        assert_eq!(card.progress, ProgressTier::Success);

        let html = card.render().unwrap();
        assert!(html.contains("progress-bar bg-success"));
        assert!(html.contains("width:75%"));
        assert!(html.contains("by Asha"));
        assert!(html.contains("87/100 enrolled"));
        assert!(html.contains("8 weeks"));
    }

    #[test]
    fn test_card_escapes_text() {
        let hostile = Course::new("<script>alert(1)</script>", "<b>Eve</b> & co", "tech")
            .level(r#"" onmouseover="x"#);
        let html = render_courses([&hostile]).unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>Eve</b>"));
        assert!(!html.contains(r#"" onmouseover="#));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; co"));
        assert_eq!(html.matches(CARD_MARKER).count(), 1);
    }

    #[test]
    fn test_error_markup() {
        let html = render_course_error().unwrap();

        assert!(html.contains(COURSES_LOAD_FAILED));
        assert!(html.contains("text-danger"));
        assert!(!html.contains(CARD_MARKER));
    }
}
