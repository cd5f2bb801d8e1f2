//! Series ingestion: raw candles into parallel numeric arrays

use super::error::EngineError;
use crate::models::indicators::Candle;

pub const MIN_LOOKBACK_DAYS: u32 = 60;
pub const MAX_LOOKBACK_DAYS: u32 = 365;

/// Minimum number of valid closes a series must carry.
pub const MIN_CANDLES: usize = 60;

/// Validated candle history for one symbol, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleSeries {
    symbol: String,
    highs: Vec<f64>,
    lows: Vec<f64>,
    closes: Vec<f64>,
}

impl CandleSeries {
    /// Build a series from upstream candles.
    ///
    /// Rows with a non-finite high, low or close are dropped and only the
    /// trailing `lookback_days` valid rows are kept. `lookback_days` is
    /// clamped into `[MIN_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS]`.
    pub fn ingest(symbol: &str, lookback_days: u32, candles: &[Candle]) -> Result<Self, EngineError> {
        if candles.is_empty() {
            return Err(EngineError::InvalidCandle(format!(
                "no candles returned for {}",
                symbol
            )));
        }

        let lookback = lookback_days.clamp(MIN_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS) as usize;
        let required = MIN_CANDLES.min(lookback);

        let valid: Vec<&Candle> = candles.iter().filter(|c| c.is_valid()).collect();
        if valid.len() < required {
            return Err(EngineError::InsufficientData {
                required,
                available: valid.len(),
            });
        }

        let window = &valid[valid.len().saturating_sub(lookback)..];

        Ok(Self {
            symbol: symbol.to_string(),
            highs: window.iter().map(|c| c.high).collect(),
            lows: window.iter().map(|c| c.low).collect(),
            closes: window.iter().map(|c| c.close).collect(),
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn highs(&self) -> &[f64] {
        &self.highs
    }

    pub fn lows(&self) -> &[f64] {
        &self.lows
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}
