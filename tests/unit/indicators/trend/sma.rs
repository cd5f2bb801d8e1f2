//! Unit tests for SMA indicator

use dipline::indicators::trend::{calculate_sma, calculate_sma_pair};

fn linear_closes(count: usize, base: f64, step: f64) -> Vec<f64> {
    (0..count).map(|i| base + i as f64 * step).collect()
}

#[test]
fn test_sma_insufficient_data() {
    let closes = linear_closes(10, 100.0, 1.0);
    assert!(calculate_sma(&closes, 20).is_none());
}

#[test]
fn test_sma_of_linear_series() {
    let closes = linear_closes(60, 0.0, 1.0);
    // mean of 40..=59
    assert_eq!(calculate_sma(&closes, 20), Some(49.5));
}

#[test]
fn test_sma_pair_needs_fifty_closes() {
    let closes = linear_closes(49, 100.0, 0.1);
    assert!(calculate_sma_pair(&closes).is_none());

    let closes = linear_closes(50, 100.0, 0.1);
    let (fast, slow) = calculate_sma_pair(&closes).unwrap();
    assert!(fast > slow);
}
