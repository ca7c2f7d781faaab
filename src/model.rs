//! Dashboard data model
//!
//! Records read from the two JSON documents:
//! - `courses.json`: aggregate [`Stats`] and the [`Course`] catalogue. Each
//!   half has its own projection ([`StatsDocument`], [`CatalogueDocument`])
//!   so a defect in one half does not fail the loader of the other.
//! - `students.json`: [`StudentsDocument`] with recent [`Enrollment`]s
//!
//! Keys are camelCase on the wire. Records are read-only snapshots.

use serde::{Deserialize, Serialize};

/// Status value marking a course or enrollment as active
pub const ACTIVE_STATUS: &str = "active";

/// A course in the catalogue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub level: String,
    pub rating: f64,
    pub price: f64,
    pub capacity: u32,
    pub enrolled: u32,
    /// Progress indicator, 0-100
    pub completion: f64,
    /// Human label such as "8 weeks"
    pub duration: String,
    pub start_date: String,
    pub status: String,
}

impl Course {
    /// Create an active course with placeholder details
    pub fn new(
        title: impl Into<String>,
        instructor: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            instructor: instructor.into(),
            category: category.into(),
            level: "Beginner".to_string(),
            rating: 0.0,
            price: 0.0,
            capacity: 0,
            enrolled: 0,
            completion: 0.0,
            duration: String::new(),
            start_date: String::new(),
            status: ACTIVE_STATUS.to_string(),
        }
    }

    /// Builder method: set completion percentage
    pub fn completion(mut self, completion: f64) -> Self {
        self.completion = completion;
        self
    }

    /// Builder method: set status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builder method: set level
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Builder method: set price
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builder method: set seat usage
    pub fn seats(mut self, enrolled: u32, capacity: u32) -> Self {
        self.enrolled = enrolled;
        self.capacity = capacity;
        self
    }

    /// Builder method: set schedule details
    pub fn schedule(mut self, duration: impl Into<String>, start_date: impl Into<String>) -> Self {
        self.duration = duration.into();
        self.start_date = start_date.into();
        self
    }

    /// Builder method: set rating
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Whether the course status is exactly "active"
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// A recent student enrollment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student_name: String,
    pub email: String,
    pub course: String,
    pub enrolled_date: String,
    /// Progress, 0-100
    pub progress: f64,
    pub status: String,
}

impl Enrollment {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// Aggregate counters shown in the stat widgets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_courses: u64,
    pub active_students: u64,
    pub avg_rating: f64,
    pub total_revenue: f64,
}

/// The `stats` half of `courses.json`; `courses` is not read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsDocument {
    pub stats: Stats,
}

/// The `courses` half of `courses.json`; `stats` is not read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueDocument {
    pub courses: Vec<Course>,
}

/// Body of `students.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentsDocument {
    pub recent_enrollments: Vec<Enrollment>,
}
