pub mod calendar_cell;
pub mod month_summary;
pub mod work_entry;

pub use calendar_cell::CalendarCell;
pub use month_summary::MonthSummary;
pub use work_entry::WorkEntry;
