//! Date and time utility functions
//!
//! Due dates arrive in several shapes; this module normalises them and renders
//! them the way Todoist does ("yesterday", "today", "tomorrow", ...).

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Standard date format used by the backend
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Parse a due value that is either a plain date or a datetime whose first
/// ten characters are a date (RFC3339, ISO 8601, space separated).
pub fn parse_due(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let value = value.trim();
    match value.get(..10) {
        Some(prefix) if value.len() > 10 => parse_date(prefix),
        _ => parse_date(value),
    }
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Human-readable rendering of `date` relative to `today`
pub fn format_relative(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Human-readable rendering of `date` relative to the local current date
pub fn format_human_date(date: NaiveDate) -> String {
    format_relative(date, Local::now().date_naive())
}

/// Whether `date` lies before the local current date
pub fn is_overdue(date: NaiveDate) -> bool {
    date < Local::now().date_naive()
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
