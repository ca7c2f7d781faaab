//! Course Store
//!
//! In-memory list of the active courses from the last successful load,
//! plus the search/category filter evaluated over it.

use crate::model::Course;
use serde::Deserialize;

/// Category selector value meaning "no category constraint"
pub const ALL_CATEGORIES: &str = "all";

/// The active courses of the current page session
///
/// Only courses whose status is "active" are ever retained; a reload
/// replaces the whole list.
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
    loaded: bool,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store contents with the active subset of `courses`
    pub fn replace(&mut self, courses: Vec<Course>) {
        let total = courses.len();
        self.courses = courses.into_iter().filter(Course::is_active).collect();
        self.loaded = true;

        tracing::debug!(
            total,
            active = self.courses.len(),
            "Course store replaced"
        );
    }

    /// All stored courses, in load order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether a course load has completed at least once
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Courses matching `filter`, preserving store order
    pub fn filter(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.courses.iter().map(|c| c.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

/// Category constraint of a filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` is the unconstrained sentinel
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Exact(category) => category,
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(expected) => expected == category,
        }
    }
}

/// Search text plus category selection
///
/// Search is a case-insensitive substring match on title OR instructor.
/// Both predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    search: String,
    pub category: CategoryFilter,
}

impl CourseFilter {
    pub fn new(search: &str, category: &str) -> Self {
        Self {
            search: search.to_lowercase(),
            category: CategoryFilter::parse(category),
        }
    }

    /// Lower-cased search text
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn matches(&self, course: &Course) -> bool {
        let text_match = course.title.to_lowercase().contains(&self.search)
            || course.instructor.to_lowercase().contains(&self.search);

        text_match && self.category.matches(&course.category)
    }
}

/// Query-string form of a filter, as submitted by the filter controls
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl FilterParams {
    pub fn to_filter(&self) -> CourseFilter {
        CourseFilter::new(
            self.search.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or(ALL_CATEGORIES),
        )
    }
}
