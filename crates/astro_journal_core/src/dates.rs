//! Date and timestamp formatting shared by content and journal code.
//!
//! Journal dates are keyed by the UTC calendar day (`YYYY-MM-DD`). Horoscope
//! headers use the local calendar day.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, SubsecRound, Utc};

/// `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long form, e.g. `"Monday, January 1, 2024"`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Horoscope header form, e.g. `"Mon Jan 01 2024"`.
pub fn horoscope_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Journal key for the current UTC day.
pub fn today_string() -> String {
    format_date(Utc::now().date_naive())
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: &str) -> bool {
    date == today_string()
}

/// Parses a journal key back into a calendar date.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Current UTC instant truncated to millisecond precision.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
