//! Local key-value [`EntryStore`], the file-system counterpart of browser
//! local storage: entries live as one JSON array under one key and the wage
//! as a decimal string under another.

use super::EntryStore;
use super::kv::KeyValueDir;
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENTRIES_KEY: &str = "worklog_data_v1";
pub const WAGE_KEY: &str = "worklog_wage_v1";

pub struct LocalStore {
    kv: KeyValueDir,
}

impl LocalStore {
    pub fn open(dir: PathBuf) -> AppResult<Self> {
        debug!(dir = %dir.display(), "opening local store");
        Ok(Self {
            kv: KeyValueDir::open(dir)?,
        })
    }

    pub fn dir(&self) -> &Path {
        self.kv.root()
    }

    fn write_entries(&self, entries: &[WorkEntry]) -> AppResult<()> {
        let json = serde_json::to_string(entries)
            .map_err(|e| AppError::CorruptState(format!("cannot serialize entries: {e}")))?;
        self.kv.set(ENTRIES_KEY, &json)
    }
}

impl EntryStore for LocalStore {
    fn list(&self) -> AppResult<Vec<WorkEntry>> {
        match self.kv.get(ENTRIES_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::CorruptState(format!("{ENTRIES_KEY}: {e}"))),
        }
    }

    fn upsert(&self, entry: &WorkEntry) -> AppResult<()> {
        let mut entries = self.list()?;
        match entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => *existing = entry.clone(),
            None => entries.push(entry.clone()),
        }
        self.write_entries(&entries)?;
        debug!(date = %entry.date, duration = entry.duration, "upserted entry");
        Ok(())
    }

    fn delete(&self, date: &str) -> AppResult<()> {
        let entries = self.list()?;
        let before = entries.len();
        let kept: Vec<WorkEntry> = entries.into_iter().filter(|e| e.date != date).collect();

        if kept.len() != before {
            self.write_entries(&kept)?;
        }
        debug!(date, removed = before - kept.len(), "deleted entry");
        Ok(())
    }

    fn get_wage(&self) -> AppResult<f64> {
        match self.kv.get(WAGE_KEY)? {
            None => Ok(0.0),
            Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                AppError::CorruptState(format!("{WAGE_KEY}: '{}' is not a number", raw.trim()))
            }),
        }
    }

    fn set_wage(&self, wage: f64) -> AppResult<()> {
        self.kv.set(WAGE_KEY, &wage.to_string())?;
        debug!(wage, "stored hourly wage");
        Ok(())
    }
}
