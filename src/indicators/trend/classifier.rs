//! Trend classification from the fast/slow SMA relationship

use crate::models::indicators::Trend;

/// Classify the trend as UP when the fast SMA is strictly above the slow one.
///
/// Ties fall to DOWN. There is no neutral state and no hysteresis, so a
/// series sitting on the crossover can flip between calls.
pub fn classify_trend(sma_fast: f64, sma_slow: f64) -> Trend {
    if sma_fast > sma_slow {
        Trend::Up
    } else {
        Trend::Down
    }
}
