//! Indicator calculator: one series plus a live price into the indicator bundle

use super::error::EngineError;
use super::ingestion::CandleSeries;
use super::validate_live_price;
use crate::indicators::structure::{calculate_fibonacci_levels, calculate_swing_range};
use crate::indicators::trend::{calculate_sma_pair, SMA_SLOW_PERIOD};
use crate::indicators::volatility::{atr_pct, calculate_atr_default, ATR_PERIOD};
use crate::models::indicators::Indicators;

/// Compute SMA20/50, ATR14, the swing range and its Fibonacci retracements.
///
/// Any indicator that cannot be computed is a hard failure, never a zero.
pub fn compute_indicators(series: &CandleSeries, live_price: f64) -> Result<Indicators, EngineError> {
    let live_price = validate_live_price(live_price)?;
    let available = series.len();

    let (sma20, sma50) =
        calculate_sma_pair(series.closes()).ok_or(EngineError::InsufficientData {
            required: SMA_SLOW_PERIOD,
            available,
        })?;

    let atr14 = calculate_atr_default(series.highs(), series.lows(), series.closes()).ok_or(
        EngineError::InsufficientData {
            required: ATR_PERIOD + 1,
            available,
        },
    )?;

    let atr_pct = atr_pct(atr14, live_price).ok_or(EngineError::InvalidPrice(live_price))?;

    let swing = calculate_swing_range(series.closes()).ok_or(EngineError::InsufficientData {
        required: 1,
        available,
    })?;
    let fib = calculate_fibonacci_levels(swing);

    let indicators = Indicators {
        sma20,
        sma50,
        atr14,
        atr_pct,
        swing_high: swing.high,
        swing_low: swing.low,
        fib618: fib.fib618,
        fib786: fib.fib786,
    };

    match indicators.first_non_finite() {
        Some(name) => Err(EngineError::IndicatorUnavailable(name)),
        None => Ok(indicators),
    }
}
