use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_strict(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Parse `YYYY-MM` into `(year, month)`.
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
    Ok((first.year(), first.month()))
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Number of days in the month, leap years included. Zero for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = first_of_month(year, month) else {
        return 0;
    };
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // only reachable for December of the last representable year
        None => 31,
    }
}

/// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_index(year: i32, month: u32) -> u32 {
    first_of_month(year, month)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = first_of_month(year, month) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}
