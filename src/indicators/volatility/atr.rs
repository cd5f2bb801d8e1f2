//! ATR (Average True Range) indicator

use crate::common::math;

pub const ATR_PERIOD: usize = 14;

/// Calculate ATR (Average True Range)
///
/// True range is taken for every bar after the first; the ATR is the plain
/// average of the last `period` of them (no Wilder smoothing).
/// Needs at least `period + 1` rows of equal-length input.
pub fn calculate_atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Option<f64> {
    let n = closes.len();
    if period == 0 || n < period + 1 || highs.len() != n || lows.len() != n {
        return None;
    }

    let tr_values: Vec<f64> = (1..n)
        .map(|i| math::true_range(highs[i], lows[i], closes[i - 1]))
        .collect();

    math::sma(&tr_values, period)
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(highs: &[f64], lows: &[f64], closes: &[f64]) -> Option<f64> {
    calculate_atr(highs, lows, closes, ATR_PERIOD)
}

/// ATR expressed as a fraction of the reference price
pub fn atr_pct(atr: f64, price: f64) -> Option<f64> {
    if price <= 0.0 || !price.is_finite() {
        return None;
    }
    Some(atr / price)
}
