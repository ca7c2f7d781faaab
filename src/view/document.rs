//! Dashboard document
//!
//! Wraps the page's element contents in a complete HTML document: stat
//! widgets, the filter form, the course grid and the enrollment table.
//! The filter form submits `search` and `category` as query parameters.

use crate::page::{Content, ElementId, Page};
use crate::store::ALL_CATEGORIES;
use askama::Template;

/// Content of one element, split by how the template inserts it:
/// `text` is escaped, `markup` goes in verbatim
struct Slot {
    text: String,
    markup: String,
}

impl Slot {
    fn of(page: &Page, id: ElementId) -> Self {
        let (text, markup) = match page.content(id) {
            Some(Content::Text(text)) => (text.clone(), String::new()),
            Some(Content::Markup(markup)) => (String::new(), markup.clone()),
            Some(Content::Empty) | None => (String::new(), String::new()),
        };
        Self { text, markup }
    }
}

struct StatWidget {
    id: ElementId,
    label: &'static str,
    icon: &'static str,
    slot: Slot,
}

struct CategoryOption<'a> {
    value: &'a str,
    label: &'a str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    stat_widgets: Vec<StatWidget>,
    has_search: bool,
    search: &'a str,
    has_category: bool,
    category_options: Vec<CategoryOption<'a>>,
    has_courses_list: bool,
    courses_list: Slot,
    has_enrollments_table: bool,
    enrollments_table: Slot,
}

/// Render the full dashboard document for `page`
///
/// `categories` populates the category selector. Elements missing from the
/// page are left out of the document.
pub fn render_document(page: &Page, categories: &[String]) -> Result<String, askama::Error> {
    let stat_widgets = [
        (ElementId::TotalCourses, "Total Courses", "bi-book"),
        (ElementId::ActiveStudents, "Active Students", "bi-people"),
        (ElementId::AvgRating, "Avg Rating", "bi-star"),
        (ElementId::TotalRevenue, "Total Revenue", "bi-currency-rupee"),
    ]
    .into_iter()
    .filter(|(id, _, _)| page.has(*id))
    .map(|(id, label, icon)| StatWidget {
        id,
        label,
        icon,
        slot: Slot::of(page, id),
    })
    .collect();

    let selected = page
        .value(ElementId::CategoryFilter)
        .unwrap_or(ALL_CATEGORIES);
    let category_options = std::iter::once(ALL_CATEGORIES)
        .chain(categories.iter().map(String::as_str))
        .map(|value| CategoryOption {
            value,
            label: if value == ALL_CATEGORIES {
                "All Categories"
            } else {
                value
            },
            selected: value == selected,
        })
        .collect();

    DashboardTemplate {
        stat_widgets,
        has_search: page.has(ElementId::CourseSearch),
        search: page.value(ElementId::CourseSearch).unwrap_or(""),
        has_category: page.has(ElementId::CategoryFilter),
        category_options,
        has_courses_list: page.has(ElementId::CoursesList),
        courses_list: Slot::of(page, ElementId::CoursesList),
        has_enrollments_table: page.has(ElementId::EnrollmentsTable),
        enrollments_table: Slot::of(page, ElementId::EnrollmentsTable),
    }
    .render()
}
