//! Persistence of work entries and the hourly wage.
//!
//! [`EntryStore`] is the single capability the rest of the crate depends on.
//! Two interchangeable backends implement it:
//! - [`SqliteStore`]: relational tables `work_entries` and `settings`
//! - [`LocalStore`]: a directory of key files, one JSON array for entries
//!   and one decimal string for the wage
//!
//! Both report [`AppError::StorageUnavailable`] when the backing storage cannot
//! be reached and [`AppError::CorruptState`] when persisted data fails to parse.
//!
//! [`AppError::StorageUnavailable`]: crate::errors::AppError::StorageUnavailable
//! [`AppError::CorruptState`]: crate::errors::AppError::CorruptState

mod kv;
pub mod local;
pub mod sqlite;

pub use local::LocalStore;
pub use sqlite::SqliteStore;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::WorkEntry;
use std::time::Duration;

pub trait EntryStore {
    /// All entries, in no particular order.
    fn list(&self) -> AppResult<Vec<WorkEntry>>;

    /// Insert the entry, or replace start/end/duration of the entry with the
    /// same date as one atomic write.
    fn upsert(&self, entry: &WorkEntry) -> AppResult<()>;

    /// Remove the entry for `date`. Absent dates are a successful no-op.
    fn delete(&self, date: &str) -> AppResult<()>;

    /// Current hourly wage; 0 until set.
    fn get_wage(&self) -> AppResult<f64>;

    fn set_wage(&self, wage: f64) -> AppResult<()>;

    fn get(&self, date: &str) -> AppResult<Option<WorkEntry>> {
        Ok(self.list()?.into_iter().find(|e| e.date == date))
    }
}

/// Open the backend selected in the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn EntryStore>> {
    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(
            &cfg.database_path(),
            Duration::from_millis(cfg.busy_timeout_ms),
        )?)),
        Backend::Local => Ok(Box::new(LocalStore::open(cfg.local_store_path())?)),
    }
}

impl<T: EntryStore + ?Sized> EntryStore for Box<T> {
    fn list(&self) -> AppResult<Vec<WorkEntry>> {
        (**self).list()
    }

    fn upsert(&self, entry: &WorkEntry) -> AppResult<()> {
        (**self).upsert(entry)
    }

    fn delete(&self, date: &str) -> AppResult<()> {
        (**self).delete(date)
    }

    fn get_wage(&self) -> AppResult<f64> {
        (**self).get_wage()
    }

    fn set_wage(&self, wage: f64) -> AppResult<()> {
        (**self).set_wage(wage)
    }

    fn get(&self, date: &str) -> AppResult<Option<WorkEntry>> {
        (**self).get(date)
    }
}
