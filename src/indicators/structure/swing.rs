//! Swing high/low over the whole window

use crate::common::math;

/// Swing range of a close series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingRange {
    pub high: f64,
    pub low: f64,
}

impl SwingRange {
    pub fn span(&self) -> f64 {
        self.high - self.low
    }
}

/// Highest and lowest close in the window.
///
/// This is a plain range, not peak detection; it only bounds the
/// retracement math.
pub fn calculate_swing_range(closes: &[f64]) -> Option<SwingRange> {
    let high = math::max(closes)?;
    let low = math::min(closes)?;
    Some(SwingRange { high, low })
}
