//! ISO-8601 week keys for the weekly recompute throttle

use chrono::{DateTime, Datelike, Utc};

/// `YYYY-Www` using the ISO week-numbering year.
pub fn week_key(at: DateTime<Utc>) -> String {
    let week = at.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Recompute unless the last result already belongs to the current week.
pub fn should_recompute(last_week_key: Option<&str>, current_week_key: &str, force: bool) -> bool {
    force || last_week_key != Some(current_week_key)
}
