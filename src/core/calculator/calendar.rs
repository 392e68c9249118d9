//! Month grid layout for a 7-column (Sunday-first) calendar.

use crate::models::CalendarCell;
use crate::utils::date::{all_days_of_month, first_weekday_index};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Lay out `year`/`month` as leading [`CalendarCell::Empty`] padding followed
/// by one cell per day.
///
/// The result always holds `first_weekday_index + days_in_month` cells; the
/// tail is not padded to a multiple of 7. `entry_dates` holds ISO
/// (`YYYY-MM-DD`) keys of days with a saved entry.
pub fn build_month_grid(
    year: i32,
    month: u32,
    selected: NaiveDate,
    today: NaiveDate,
    entry_dates: &HashSet<String>,
) -> Vec<CalendarCell> {
    let days = all_days_of_month(year, month);
    if days.is_empty() {
        return Vec::new();
    }

    let offset = first_weekday_index(year, month) as usize;
    let mut cells = Vec::with_capacity(offset + days.len());
    cells.extend(std::iter::repeat_n(CalendarCell::Empty, offset));

    for date in days {
        let key = date.format("%Y-%m-%d").to_string();
        cells.push(CalendarCell::Day {
            date,
            is_selected: date == selected,
            is_today: date == today,
            has_entry: entry_dates.contains(&key),
        });
    }

    cells
}

/// Split a grid into rows of 7, padding the last row with empty cells.
pub fn into_weeks(cells: &[CalendarCell]) -> Vec<[CalendarCell; 7]> {
    cells
        .chunks(7)
        .map(|chunk| {
            let mut week = [CalendarCell::Empty; 7];
            week[..chunk.len()].copy_from_slice(chunk);
            week
        })
        .collect()
}
