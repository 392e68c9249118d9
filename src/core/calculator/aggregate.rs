//! Folding entries into monthly totals and projected earnings.

use crate::models::{MonthSummary, WorkEntry};
use chrono::{Datelike, NaiveDate};
use tracing::warn;

fn in_month(entry: &WorkEntry, year: i32, month: u32) -> bool {
    match entry.calendar_date() {
        Some(d) => d.year() == year && d.month() == month,
        None => {
            warn!(date = %entry.date, "skipping entry with malformed date");
            false
        }
    }
}

/// Entries of the given month, ascending by date. Malformed dates are skipped.
pub fn entries_for_month(entries: &[WorkEntry], year: i32, month: u32) -> Vec<WorkEntry> {
    let mut out: Vec<WorkEntry> = entries
        .iter()
        .filter(|e| in_month(e, year, month))
        .cloned()
        .collect();
    out.sort_by(|a, b| a.date.cmp(&b.date));
    out
}

pub fn summarize_month(entries: &[WorkEntry], year: i32, month: u32, wage: f64) -> MonthSummary {
    let (total_hours, entry_count) = entries
        .iter()
        .filter(|e| in_month(e, year, month))
        .fold((0.0, 0usize), |(hours, count), e| {
            (hours + e.duration, count + 1)
        });

    MonthSummary {
        total_hours,
        entry_count,
        projected_earnings: total_hours * wage,
    }
}

/// Same-month running hours, one value per entry of `month_entries`
/// (expected to be sorted as returned by [`entries_for_month`]).
pub fn running_totals(month_entries: &[WorkEntry]) -> Vec<f64> {
    month_entries
        .iter()
        .scan(0.0, |acc, e| {
            *acc += e.duration;
            Some(*acc)
        })
        .collect()
}

/// Month total plus an unsaved `pending` entry's duration, counted only when
/// no entry is saved for the pending date yet.
pub fn month_running_hours(
    entries: &[WorkEntry],
    year: i32,
    month: u32,
    pending: &WorkEntry,
) -> f64 {
    let saved = summarize_month(entries, year, month, 0.0).total_hours;
    if entries.iter().any(|e| e.date == pending.date) {
        saved
    } else {
        saved + pending.duration
    }
}

/// Sum of durations of all entries strictly before `date`.
pub fn cumulative_hours_before(entries: &[WorkEntry], date: NaiveDate) -> f64 {
    entries
        .iter()
        .filter_map(|e| e.calendar_date().map(|d| (d, e.duration)))
        .filter(|(d, _)| *d < date)
        .map(|(_, hours)| hours)
        .sum()
}
