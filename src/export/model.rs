use crate::models::WorkEntry;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Debug, Clone, Serialize)]
pub struct EntryExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    pub earnings: f64,
}

impl EntryExport {
    pub fn from_entry(entry: &WorkEntry, wage: f64) -> Self {
        Self {
            date: entry.date.clone(),
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
            hours: entry.duration,
            earnings: entry.earnings(wage),
        }
    }
}
