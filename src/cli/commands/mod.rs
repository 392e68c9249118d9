pub mod add;
pub mod calendar;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod insight;
pub mod list;
pub mod summary;
pub mod wage;

use crate::config::Config;
use crate::core::{AppState, Worklog};
use crate::errors::AppResult;
use crate::store::{self, EntryStore};
use crate::utils::date;

pub(crate) fn open_worklog(cfg: &Config) -> AppResult<Worklog<Box<dyn EntryStore>>> {
    Ok(Worklog::new(store::open(cfg)?))
}

/// View state for an optional `YYYY-MM` argument, defaulting to today's month.
pub(crate) fn state_for_month(month: Option<&String>) -> AppResult<AppState> {
    let mut state = AppState::new(date::today());
    if let Some(m) = month {
        let (year, month) = date::parse_month(m)?;
        state.view(year, month);
    }
    Ok(state)
}
