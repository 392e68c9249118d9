use chrono::NaiveDate;
use serde::Serialize;

/// One slot of a month laid out as a 7-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalendarCell {
    /// Padding before the first day of the month.
    Empty,
    Day {
        date: NaiveDate,
        is_selected: bool,
        is_today: bool,
        has_entry: bool,
    },
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }

    pub fn has_entry(&self) -> bool {
        matches!(self, CalendarCell::Day { has_entry: true, .. })
    }
}
