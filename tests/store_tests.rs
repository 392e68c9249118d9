mod common;
use chrono::{NaiveDate, NaiveTime};
use common::{entry, march_sample};
use rusqlite::{Connection, params};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use worklog::core::Worklog;
use worklog::errors::AppError;
use worklog::store::local::{ENTRIES_KEY, WAGE_KEY};
use worklog::store::{EntryStore, LocalStore, SqliteStore};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn seed(store: &dyn EntryStore) {
    for e in march_sample() {
        store.upsert(&e).unwrap();
    }
}

/// Behaviour every backend must share.
fn check_contract(store: &dyn EntryStore) {
    assert!(store.list().unwrap().is_empty());
    assert_eq!(store.get_wage().unwrap(), 0.0);

    store.upsert(&entry("2024-03-01", "09:00", "17:00", 8.0)).unwrap();
    store.upsert(&entry("2024-03-01", "10:00", "12:30", 2.5)).unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].start_time, "10:00");
    assert_eq!(all[0].end_time, "12:30");
    assert_eq!(all[0].duration, 2.5);

    let got = store.get("2024-03-01").unwrap().unwrap();
    assert_eq!(got.duration, 2.5);
    assert!(store.get("2024-03-02").unwrap().is_none());

    // absent date is a no-op
    store.delete("2024-12-31").unwrap();
    assert_eq!(store.list().unwrap().len(), 1);

    store.delete("2024-03-01").unwrap();
    assert!(store.list().unwrap().is_empty());

    store.set_wage(22.5).unwrap();
    assert_eq!(store.get_wage().unwrap(), 22.5);
    store.set_wage(0.0).unwrap();
    assert_eq!(store.get_wage().unwrap(), 0.0);
}

#[test]
fn test_sqlite_in_memory_contract() {
    let store = SqliteStore::open_in_memory().unwrap();
    check_contract(&store);
}

#[test]
fn test_local_contract() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path().join("kv")).unwrap();
    check_contract(&store);
}

#[test]
fn test_sqlite_file_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wl.sqlite");

    {
        let store = SqliteStore::open(&path, Duration::from_millis(500)).unwrap();
        seed(&store);
        store.set_wage(20.0).unwrap();
    }

    let store = SqliteStore::open(&path, Duration::from_millis(500)).unwrap();
    let mut dates: Vec<String> = store.list().unwrap().into_iter().map(|e| e.date).collect();
    dates.sort();
    assert_eq!(dates, vec!["2024-03-01", "2024-03-15", "2024-04-01"]);
    assert_eq!(store.get_wage().unwrap(), 20.0);
}

#[test]
fn test_local_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = LocalStore::open(dir.path().to_path_buf()).unwrap();
        seed(&store);
        store.set_wage(15.0).unwrap();
    }

    let store = LocalStore::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(store.list().unwrap().len(), 3);
    assert_eq!(store.get_wage().unwrap(), 15.0);

    // no temp file left behind
    assert!(!dir.path().join(format!("{ENTRIES_KEY}.tmp")).exists());
    let raw = fs::read_to_string(dir.path().join(ENTRIES_KEY)).unwrap();
    assert!(raw.contains("\"startTime\":\"09:00\""));
}

#[test]
fn test_local_garbage_entries_is_corrupt() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(ENTRIES_KEY), "not json at all").unwrap();

    let store = LocalStore::open(dir.path().to_path_buf()).unwrap();
    assert!(matches!(store.list(), Err(AppError::CorruptState(_))));
}

#[test]
fn test_local_garbage_wage_is_corrupt() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(WAGE_KEY), "twenty").unwrap();

    let store = LocalStore::open(dir.path().to_path_buf()).unwrap();
    assert!(matches!(store.get_wage(), Err(AppError::CorruptState(_))));
}

#[test]
fn test_sqlite_garbage_wage_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wl.sqlite");
    let store = SqliteStore::open(&path, Duration::from_millis(500)).unwrap();

    let raw = Connection::open(&path).unwrap();
    raw.execute(
        "INSERT INTO settings (setting_key, setting_value) VALUES ('hourly_wage', 'abc')",
        [],
    )
    .unwrap();

    assert!(matches!(store.get_wage(), Err(AppError::CorruptState(_))));
}

#[test]
fn test_sqlite_garbage_duration_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wl.sqlite");
    let store = SqliteStore::open(&path, Duration::from_millis(500)).unwrap();

    let raw = Connection::open(&path).unwrap();
    raw.execute(
        "INSERT INTO work_entries (date, startTime, endTime, duration) VALUES (?1, ?2, ?3, ?4)",
        params!["2024-03-01", "09:00", "17:00", "abc"],
    )
    .unwrap();

    assert!(matches!(store.list(), Err(AppError::CorruptState(_))));
}

#[test]
fn test_sqlite_missing_directory_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("wl.sqlite");

    let res = SqliteStore::open(&path, Duration::from_millis(100));
    assert!(matches!(res, Err(AppError::StorageUnavailable(_))));
}

#[test]
fn test_local_under_regular_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let res = LocalStore::open(blocker.join("kv"));
    assert!(matches!(res, Err(AppError::StorageUnavailable(_))));
}

#[test]
fn test_worklog_rejects_negative_wage() {
    let wl = Worklog::new(SqliteStore::open_in_memory().unwrap());

    assert!(matches!(wl.set_wage(-1.0), Err(AppError::InvalidWage(_))));
    assert!(matches!(wl.set_wage(f64::NAN), Err(AppError::InvalidWage(_))));
    assert_eq!(wl.get_wage().unwrap(), 0.0);

    wl.set_wage(18.0).unwrap();
    assert_eq!(wl.get_wage().unwrap(), 18.0);
}

#[test]
fn test_worklog_prepare_entry_defaults() {
    let wl = Worklog::new(SqliteStore::open_in_memory().unwrap());

    let fresh = wl.prepare_entry(d(2024, 3, 4), None, None).unwrap();
    assert_eq!(fresh.start_time, "09:00");
    assert_eq!(fresh.end_time, "17:00");
    assert_eq!(fresh.duration, 8.0);

    wl.save_entry(d(2024, 3, 4), t(10, 0), t(14, 0)).unwrap();

    let edited = wl.prepare_entry(d(2024, 3, 4), None, Some(t(15, 30))).unwrap();
    assert_eq!(edited.start_time, "10:00");
    assert_eq!(edited.end_time, "15:30");
    assert_eq!(edited.duration, 5.5);

    // preparing never writes
    assert_eq!(wl.entry(d(2024, 3, 4)).unwrap().unwrap().duration, 4.0);
}

#[test]
fn test_worklog_month_views_through_store() {
    let dir = TempDir::new().unwrap();
    let wl = Worklog::new(LocalStore::open(dir.path().to_path_buf()).unwrap());
    seed(wl.store());
    wl.set_wage(20.0).unwrap();

    let summary = wl.summarize_month(2024, 3).unwrap();
    assert_eq!(summary.total_hours, 14.0);
    assert_eq!(summary.entry_count, 2);
    assert_eq!(summary.projected_earnings, 280.0);

    let grid = wl
        .build_month_grid(2024, 3, d(2024, 3, 15), d(2024, 3, 20))
        .unwrap();
    let logged: Vec<NaiveDate> = grid
        .iter()
        .filter(|c| c.has_entry())
        .filter_map(|c| c.date())
        .collect();
    assert_eq!(logged, vec![d(2024, 3, 1), d(2024, 3, 15)]);

    let month = wl.month_entries(2024, 3).unwrap();
    assert_eq!(month[0].date, "2024-03-01");
    assert_eq!(month[1].date, "2024-03-15");

    wl.delete_entry(d(2024, 3, 1)).unwrap();
    assert_eq!(wl.summarize_month(2024, 3).unwrap().total_hours, 6.0);
}
