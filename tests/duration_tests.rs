use chrono::NaiveTime;
use worklog::core::calculator::duration::{compute_duration, compute_duration_str};
use worklog::errors::AppError;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

#[test]
fn test_full_working_day() {
    assert_eq!(compute_duration(t("09:00"), t("17:00")), 8.0);
}

#[test]
fn test_equal_times_are_zero() {
    assert_eq!(compute_duration(t("09:00"), t("09:00")), 0.0);
}

#[test]
fn test_end_before_start_clamps_to_zero() {
    // no overnight wraparound, no negative values
    assert_eq!(compute_duration(t("17:00"), t("09:00")), 0.0);
    assert_eq!(compute_duration(t("23:00"), t("01:00")), 0.0);
}

#[test]
fn test_fractional_hours_are_preserved() {
    assert_eq!(compute_duration(t("09:00"), t("16:30")), 7.5);
    assert_eq!(compute_duration(t("08:15"), t("09:00")), 0.75);

    let twenty_minutes = compute_duration(t("10:00"), t("10:20"));
    assert!((twenty_minutes - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_whole_day_span() {
    assert_eq!(compute_duration(t("00:00"), t("23:59")), 1439.0 / 60.0);
}

#[test]
fn test_string_variant_parses_and_rejects() {
    assert_eq!(compute_duration_str("09:00", "17:30").unwrap(), 8.5);

    match compute_duration_str("9am", "17:00") {
        Err(AppError::InvalidTime(s)) => assert_eq!(s, "9am"),
        other => panic!("expected InvalidTime, got {:?}", other),
    }
    assert!(compute_duration_str("09:00", "25:00").is_err());
}
