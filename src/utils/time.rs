//! Time utilities: parsing HH:MM, minutes since midnight, formatting hours.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const DEFAULT_START: &str = "09:00";
pub const DEFAULT_END: &str = "17:00";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_time_strict(s)).transpose()
}

/// `h * 60 + m`; seconds are ignored.
pub fn minutes_since_midnight(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// One decimal place, e.g. `7.5h`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}
