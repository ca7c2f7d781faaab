//! Display Formatting
//!
//! Pure helpers that turn raw numbers and date strings into the text shown
//! on the dashboard. Locale rules are fixed:
//! - Currency: `₹` prefix with Indian digit grouping (`12,34,567`)
//! - Plain numbers: western grouping (`1,234,567`)
//! - Dates: `D Mon YYYY` with Indian-English short month names

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Currency symbol prepended to every formatted amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// Text rendered for a date string that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Maximum number of fraction digits kept by the number formatters
const MAX_FRACTION_DIGITS: usize = 3;

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Digit grouping convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// Groups of three: 1,234,567
    Western,
    /// Last three digits, then groups of two: 12,34,567
    Indian,
}

/// Format an amount as rupees, e.g. `1234567` → `₹12,34,567`
pub fn format_currency(amount: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_grouped(amount, Grouping::Indian))
}

/// Format a count with western digit grouping, e.g. `15420` → `15,420`
pub fn format_number(value: f64) -> String {
    format_grouped(value, Grouping::Western)
}

/// Format a rating with exactly one decimal place
pub fn format_rating(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format a date string as `D Mon YYYY`, e.g. `2024-01-15` → `15 Jan 2024`
///
/// Accepts plain dates, RFC 3339 timestamps (converted to UTC) and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps. Anything else renders as
/// [`INVALID_DATE`].
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            SHORT_MONTHS[date.month0() as usize],
            date.year()
        ),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn format_grouped(value: f64, grouping: Grouping) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    // Rounding can turn a tiny negative into zero; never render "-0"
    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());

    let mut out = String::with_capacity(fixed.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_group = match grouping {
        Grouping::Western => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(head_group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}
