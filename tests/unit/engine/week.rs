//! Unit tests for ISO week keys

use chrono::{TimeZone, Utc};
use dipline::engine::{should_recompute, week_key};

#[test]
fn test_week_key_format() {
    let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    assert_eq!(week_key(at), "2026-W43");
}

#[test]
fn test_week_key_uses_iso_year() {
    let new_year = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(week_key(new_year), "2020-W53");

    let late_december = Utc.with_ymd_and_hms(2024, 12, 30, 0, 0, 0).unwrap();
    assert_eq!(week_key(late_december), "2025-W01");
}

#[test]
fn test_week_key_pads_single_digit_weeks() {
    let sunday = Utc.with_ymd_and_hms(2024, 1, 7, 23, 59, 59).unwrap();
    assert_eq!(week_key(sunday), "2024-W01");
}

#[test]
fn test_should_recompute() {
    assert!(should_recompute(None, "2026-W43", false));
    assert!(should_recompute(Some("2026-W42"), "2026-W43", false));
    assert!(!should_recompute(Some("2026-W43"), "2026-W43", false));
    assert!(should_recompute(Some("2026-W43"), "2026-W43", true));
}
