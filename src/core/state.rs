use crate::models::WorkEntry;
use crate::utils::time::{DEFAULT_END, DEFAULT_START, parse_time};
use chrono::{Datelike, Months, NaiveDate, NaiveTime};

/// Calendar view state: which month is shown and which day is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub today: NaiveDate,
    pub selected: NaiveDate,
    pub view_year: i32,
    pub view_month: u32,
}

impl AppState {
    /// Start on `today`, both selected and in view.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            selected: today,
            view_year: today.year(),
            view_month: today.month(),
        }
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn view(&mut self, year: i32, month: u32) {
        if NaiveDate::from_ymd_opt(year, month, 1).is_some() {
            self.view_year = year;
            self.view_month = month;
        }
    }

    /// Move the view by whole months and years, landing on the 1st.
    /// The selected day is left alone. Out-of-range targets are ignored.
    pub fn navigate(&mut self, months: i32, years: i32) {
        let Some(first) = NaiveDate::from_ymd_opt(self.view_year, self.view_month, 1) else {
            return;
        };

        let delta = i64::from(years) * 12 + i64::from(months);
        let shift = Months::new(delta.unsigned_abs().min(u32::MAX as u64) as u32);
        let target = if delta >= 0 {
            first.checked_add_months(shift)
        } else {
            first.checked_sub_months(shift)
        };

        if let Some(t) = target {
            self.view_year = t.year();
            self.view_month = t.month();
        }
    }

    /// Times to pre-fill for the selected day: the saved entry's, else 09:00-17:00.
    pub fn pending_times(&self, entries: &[WorkEntry]) -> (NaiveTime, NaiveTime) {
        let key = self.selected.format("%Y-%m-%d").to_string();
        let existing = entries.iter().find(|e| e.date == key);
        default_times(existing)
    }
}

pub(crate) fn default_times(existing: Option<&WorkEntry>) -> (NaiveTime, NaiveTime) {
    let fallback_start = parse_time(DEFAULT_START).unwrap_or(NaiveTime::MIN);
    let fallback_end = parse_time(DEFAULT_END).unwrap_or(NaiveTime::MIN);

    match existing {
        Some(e) => (
            e.start().unwrap_or(fallback_start),
            e.end().unwrap_or(fallback_end),
        ),
        None => (fallback_start, fallback_end),
    }
}
