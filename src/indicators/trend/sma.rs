//! SMA (Simple Moving Average) indicator

use crate::common::math;

pub const SMA_FAST_PERIOD: usize = 20;
pub const SMA_SLOW_PERIOD: usize = 50;

/// Calculate the SMA of the last `period` closes
pub fn calculate_sma(closes: &[f64], period: usize) -> Option<f64> {
    math::sma(closes, period)
}

/// Calculate the fast (20) and slow (50) SMAs at once
pub fn calculate_sma_pair(closes: &[f64]) -> Option<(f64, f64)> {
    let fast = calculate_sma(closes, SMA_FAST_PERIOD)?;
    let slow = calculate_sma(closes, SMA_SLOW_PERIOD)?;
    Some((fast, slow))
}
