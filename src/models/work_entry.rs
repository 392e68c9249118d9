use crate::core::calculator::duration::compute_duration;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One calendar day's logged work.
///
/// Fields are kept in their persisted text form (`YYYY-MM-DD`, `HH:MM`) so a
/// single malformed row can be recognised and skipped by consumers instead of
/// failing the whole read. `duration` is computed once at save time and
/// stored alongside the times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: f64,
}

impl WorkEntry {
    /// Build an entry from typed values, deriving `duration` from the times.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            start_time: start.format("%H:%M").to_string(),
            end_time: end.format("%H:%M").to_string(),
            duration: compute_duration(start, end),
        }
    }

    /// Calendar date of the entry, or `None` when the stored text is malformed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn start(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.start_time, "%H:%M").ok()
    }

    pub fn end(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.end_time, "%H:%M").ok()
    }

    /// Earnings for this single row.
    pub fn earnings(&self, wage: f64) -> f64 {
        self.duration * wage
    }
}
