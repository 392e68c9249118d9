#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;
use tempfile::TempDir;
use worklog::models::WorkEntry;

/// Isolated HOME plus a storage location inside it.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    pub fn db_path(&self) -> String {
        self.home
            .path()
            .join("test_worklog.sqlite")
            .to_string_lossy()
            .to_string()
    }

    pub fn local_dir(&self) -> String {
        self.home.path().join("local").to_string_lossy().to_string()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// `worklog` with HOME redirected and colors/diagnostics off.
    pub fn wl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("worklog");
        cmd.env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env("RUST_LOG", "off")
            .env_remove("GEMINI_API_KEY");
        cmd
    }

    /// `worklog --db <sqlite file> <args>`
    pub fn run(&self, args: &[&str]) -> Command {
        let db = self.db_path();
        let mut cmd = self.wl();
        cmd.args(["--db", db.as_str()]).args(args);
        cmd
    }
}

pub fn entry(date: &str, start: &str, end: &str, duration: f64) -> WorkEntry {
    WorkEntry {
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        duration,
    }
}

/// Two March 2024 entries and one in April.
pub fn march_sample() -> Vec<WorkEntry> {
    vec![
        entry("2024-03-01", "09:00", "17:00", 8.0),
        entry("2024-03-15", "10:00", "16:00", 6.0),
        entry("2024-04-01", "09:00", "14:00", 5.0),
    ]
}
