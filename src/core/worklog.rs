use crate::core::calculator::{aggregate, calendar};
use crate::core::state::default_times;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarCell, MonthSummary, WorkEntry};
use crate::store::EntryStore;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;

/// Read/write surface for the presentation layer, independent of the backend.
pub struct Worklog<S> {
    store: S,
}

impl<S: EntryStore> Worklog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_entries(&self) -> AppResult<Vec<WorkEntry>> {
        self.store.list()
    }

    pub fn entry(&self, date: NaiveDate) -> AppResult<Option<WorkEntry>> {
        self.store.get(&date.format("%Y-%m-%d").to_string())
    }

    /// Build the entry that saving would write. Missing times fall back to the
    /// saved entry's values, then to 09:00-17:00.
    pub fn prepare_entry(
        &self,
        date: NaiveDate,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> AppResult<WorkEntry> {
        let (default_start, default_end) = if start.is_some() && end.is_some() {
            default_times(None)
        } else {
            default_times(self.entry(date)?.as_ref())
        };

        Ok(WorkEntry::new(
            date,
            start.unwrap_or(default_start),
            end.unwrap_or(default_end),
        ))
    }

    /// Upsert the entry for `date` with a freshly computed duration.
    pub fn save_entry(
        &self,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> AppResult<WorkEntry> {
        let entry = WorkEntry::new(date, start, end);
        self.save(&entry)?;
        Ok(entry)
    }

    pub fn save(&self, entry: &WorkEntry) -> AppResult<()> {
        self.store.upsert(entry)
    }

    pub fn delete_entry(&self, date: NaiveDate) -> AppResult<()> {
        self.store.delete(&date.format("%Y-%m-%d").to_string())
    }

    pub fn get_wage(&self) -> AppResult<f64> {
        self.store.get_wage()
    }

    /// Rejects negative and non-finite rates.
    pub fn set_wage(&self, wage: f64) -> AppResult<()> {
        if !wage.is_finite() || wage < 0.0 {
            return Err(AppError::InvalidWage(wage.to_string()));
        }
        self.store.set_wage(wage)
    }

    pub fn build_month_grid(
        &self,
        year: i32,
        month: u32,
        selected: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<Vec<CalendarCell>> {
        let keys: HashSet<String> = self.store.list()?.into_iter().map(|e| e.date).collect();
        Ok(calendar::build_month_grid(year, month, selected, today, &keys))
    }

    pub fn summarize_month(&self, year: i32, month: u32) -> AppResult<MonthSummary> {
        let entries = self.store.list()?;
        let wage = self.store.get_wage()?;
        Ok(aggregate::summarize_month(&entries, year, month, wage))
    }

    /// The month's entries, ascending by date.
    pub fn month_entries(&self, year: i32, month: u32) -> AppResult<Vec<WorkEntry>> {
        Ok(aggregate::entries_for_month(&self.store.list()?, year, month))
    }
}
