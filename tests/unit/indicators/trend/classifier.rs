//! Unit tests for trend classification

use dipline::indicators::trend::classify_trend;
use dipline::models::Trend;

#[test]
fn test_fast_above_slow_is_up() {
    assert_eq!(classify_trend(101.0, 100.0), Trend::Up);
}

#[test]
fn test_fast_below_slow_is_down() {
    assert_eq!(classify_trend(99.0, 100.0), Trend::Down);
}

#[test]
fn test_tie_is_down() {
    assert_eq!(classify_trend(100.0, 100.0), Trend::Down);
}

#[test]
fn test_trend_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"UP\"");
    assert_eq!(serde_json::to_string(&Trend::Down).unwrap(), "\"DOWN\"");
    assert_eq!(Trend::Down.to_string(), "DOWN");
}
