//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::sync::OnceLock;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use uuid::Uuid;

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Avatar URL generated for accounts created through signup
pub fn generated_avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        urlencoding::encode(name)
    )
}

/// Long form used on the event details page, e.g. "Saturday, June 14, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Short form used on event cards, e.g. "Sat, Jun 14"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// 12-hour clock, e.g. "6:00 PM"
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Human duration, e.g. "45 minutes", "2 hours", "1 hour 30 minutes"
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    let plural = if hours > 1 { "s" } else { "" };

    if hours == 0 {
        format!("{} minutes", mins)
    } else if mins == 0 {
        format!("{} hour{}", hours, plural)
    } else {
        format!("{} hour{} {} minutes", hours, plural, mins)
    }
}

/// Result count label, e.g. "1 event found" / "3 events found"
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{} {} found", count, noun)
}

/// Loose email shape check matching what a browser `type=email` input accepts
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email pattern is valid")
        })
        .is_match(email)
}

/// Unique values in first-seen order
pub fn unique_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Normalize optional text input: empty strings mean "not provided"
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45 minutes");
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(120), "2 hours");
        assert_eq!(format_duration(90), "1 hour 30 minutes");
        assert_eq!(format_duration(150), "2 hours 30 minutes");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap()), "6:00 PM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(0, 15, 0).unwrap()), "12:15 AM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(12, 5, 0).unwrap()), "12:05 PM");
    }

    #[test]
    fn test_format_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(format_long_date(date), "Saturday, June 14, 2025");
        assert_eq!(format_short_date(date), "Sat, Jun 14");
    }

    #[test]
    fn test_generated_avatar_url_encodes_name() {
        assert_eq!(
            generated_avatar_url("Ann Lee"),
            "https://ui-avatars.com/api/?name=Ann%20Lee&background=random"
        );
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1, "event", "events"), "1 event found");
        assert_eq!(count_label(0, "buddy", "buddies"), "0 buddies found");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two words@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_unique_in_order() {
        let values = ["Chicago, IL", "Miami, FL", "Chicago, IL"];
        assert_eq!(unique_in_order(values), vec!["Chicago, IL", "Miami, FL"]);
    }
}
