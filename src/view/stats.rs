//! Stat widgets

use crate::format::{format_currency, format_number, format_rating};
use crate::model::Stats;

/// Text of the four stat widgets
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub total_courses: String,
    pub active_students: String,
    pub avg_rating: String,
    pub total_revenue: String,
}

impl From<&Stats> for StatsView {
    fn from(stats: &Stats) -> Self {
        Self {
            total_courses: stats.total_courses.to_string(),
            active_students: format_number(stats.active_students as f64),
            avg_rating: format_rating(stats.avg_rating),
            total_revenue: format_currency(stats.total_revenue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_view() {
        let view = StatsView::from(&Stats {
            total_courses: 12,
            active_students: 15420,
            avg_rating: 4.63,
            total_revenue: 2845000.0,
        });

        assert_eq!(view.total_courses, "12");
        assert_eq!(view.active_students, "15,420");
        assert_eq!(view.avg_rating, "4.6");
        assert_eq!(view.total_revenue, "₹28,45,000");
    }
}
