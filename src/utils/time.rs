//! Timestamp utilities: parsing "YYYY-MM-DD HH:MM", formatting hours.
//!
//! All timestamps are naive and minute-precise; whatever timezone the user
//! logs in is the timezone everything is compared in. No conversions.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};

pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT).ok()
}

pub fn format_datetime(t: NaiveDateTime) -> String {
    t.format(DATETIME_FMT).to_string()
}

/// Current local time truncated to the minute, matching the storage
/// precision.
pub fn now_minute() -> NaiveDateTime {
    use chrono::Timelike;
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// `--at` is optional on start/end; absent means "now".
pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<NaiveDateTime> {
    match input {
        Some(s) => parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.to_string())),
        None => Ok(now_minute()),
    }
}

/// Render fractional hours as "16h 30m".
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", total_minutes / 60, total_minutes % 60)
}
