//! The entry-price pipeline: ingestion, indicators, trend, entries.
//!
//! Each run is independent and deterministic for a given input and clock.

pub mod calculator;
pub mod error;
pub mod ingestion;
pub mod synthesizer;
pub mod week;

pub use calculator::compute_indicators;
pub use error::EngineError;
pub use ingestion::{CandleSeries, MAX_LOOKBACK_DAYS, MIN_CANDLES, MIN_LOOKBACK_DAYS};
pub use synthesizer::{dip_sizes, synthesize_entries, DipSizes, UserDiscount, MIN_UNDER_LIVE};
pub use week::{should_recompute, week_key};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::trend::classify_trend;
use crate::models::entry::EngineResult;
use crate::models::indicators::Candle;

/// Everything one engine run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineInput {
    pub symbol: String,
    pub lookback_days: u32,
    pub candles: Vec<Candle>,
    pub live_price: f64,
    #[serde(default)]
    pub user_discount_pct: Option<f64>,
}

/// Reject zero, negative and non-finite live prices.
pub fn validate_live_price(live_price: f64) -> Result<f64, EngineError> {
    if live_price.is_finite() && live_price > 0.0 {
        Ok(live_price)
    } else {
        Err(EngineError::InvalidPrice(live_price))
    }
}

/// Run the full pipeline.
///
/// `now` only stamps the result and picks its week key.
pub fn compute_entries(input: &EngineInput, now: DateTime<Utc>) -> Result<EngineResult, EngineError> {
    let live_price = validate_live_price(input.live_price)?;

    let series = CandleSeries::ingest(&input.symbol, input.lookback_days, &input.candles)?;
    let indicators = compute_indicators(&series, live_price)?;
    let trend = classify_trend(indicators.sma20, indicators.sma50);

    let discount = UserDiscount::from_setting(input.user_discount_pct);
    let entries = synthesize_entries(trend, &indicators, live_price, discount)?;

    Ok(EngineResult {
        symbol: series.symbol().to_string(),
        trend,
        indicators,
        entries,
        live_price,
        user_discount_pct: discount.pct(),
        computed_at: now,
        computed_at_week_key: week_key(now),
    })
}
