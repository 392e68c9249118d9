//! SQLite-backed [`EntryStore`].

use super::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const WAGE_KEY: &str = "hourly_wage";

/// Ordered schema migrations; index + 1 is the resulting `user_version`.
const MIGRATIONS: &[&str] = &[r#"
    CREATE TABLE IF NOT EXISTS work_entries (
        date      TEXT PRIMARY KEY,   -- YYYY-MM-DD
        startTime TEXT NOT NULL,      -- HH:MM
        endTime   TEXT NOT NULL,      -- HH:MM
        duration  REAL NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS settings (
        setting_key   TEXT PRIMARY KEY,
        setting_value TEXT NOT NULL
    );
    "#];

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the database file and bring the schema up to date.
    /// Lock contention waits at most `busy_timeout` before failing.
    pub fn open(path: &Path, busy_timeout: Duration) -> AppResult<Self> {
        debug!(path = %path.display(), "opening sqlite store");
        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}

/// Apply every migration newer than the database's `user_version`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    for (idx, sql) in MIGRATIONS.iter().enumerate() {
        let version = idx as i64 + 1;
        if version <= current {
            continue;
        }
        conn.execute_batch(&format!(
            "BEGIN;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;"
        ))?;
        debug!(version, "applied schema migration");
    }

    Ok(())
}

fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<WorkEntry> {
    Ok(WorkEntry {
        date: row.get("date")?,
        start_time: row.get("startTime")?,
        end_time: row.get("endTime")?,
        duration: row.get("duration")?,
    })
}

impl EntryStore for SqliteStore {
    fn list(&self) -> AppResult<Vec<WorkEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT date, startTime, endTime, duration
             FROM work_entries
             ORDER BY date DESC",
        )?;
        let rows = stmt.query_map([], row_to_entry)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn upsert(&self, entry: &WorkEntry) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO work_entries (date, startTime, endTime, duration)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(date) DO UPDATE SET
                startTime = excluded.startTime,
                endTime   = excluded.endTime,
                duration  = excluded.duration",
            params![entry.date, entry.start_time, entry.end_time, entry.duration],
        )?;
        debug!(date = %entry.date, duration = entry.duration, "upserted entry");
        Ok(())
    }

    fn delete(&self, date: &str) -> AppResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM work_entries WHERE date = ?1", params![date])?;
        debug!(date, removed, "deleted entry");
        Ok(())
    }

    fn get_wage(&self) -> AppResult<f64> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT setting_value FROM settings WHERE setting_key = ?1 LIMIT 1",
                params![WAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            None => Ok(0.0),
            Some(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| AppError::CorruptState(format!("stored wage '{s}' is not a number"))),
        }
    }

    fn set_wage(&self, wage: f64) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO settings (setting_key, setting_value)
             VALUES (?1, ?2)
             ON CONFLICT(setting_key) DO UPDATE SET setting_value = excluded.setting_value",
            params![WAGE_KEY, wage.to_string()],
        )?;
        debug!(wage, "stored hourly wage");
        Ok(())
    }

    fn get(&self, date: &str) -> AppResult<Option<WorkEntry>> {
        let entry = self
            .conn
            .query_row(
                "SELECT date, startTime, endTime, duration FROM work_entries WHERE date = ?1",
                params![date],
                row_to_entry,
            )
            .optional()?;
        Ok(entry)
    }
}
