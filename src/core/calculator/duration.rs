//! Elapsed working hours between two times of day.

use crate::errors::AppResult;
use crate::utils::time::{minutes_since_midnight, parse_time_strict};
use chrono::NaiveTime;

/// Hours between `start` and `end` on the same day.
///
/// An end at or before the start yields `0.0`: overnight shifts are not
/// supported and the result never wraps into the next day. No rounding is
/// applied, so `09:00`–`16:30` is exactly `7.5`.
pub fn compute_duration(start: NaiveTime, end: NaiveTime) -> f64 {
    let start_minutes = minutes_since_midnight(start);
    let end_minutes = minutes_since_midnight(end);

    if end_minutes <= start_minutes {
        return 0.0;
    }

    (end_minutes - start_minutes) as f64 / 60.0
}

/// Same as [`compute_duration`] for `HH:MM` strings.
pub fn compute_duration_str(start: &str, end: &str) -> AppResult<f64> {
    let s = parse_time_strict(start)?;
    let e = parse_time_strict(end)?;
    Ok(compute_duration(s, e))
}
