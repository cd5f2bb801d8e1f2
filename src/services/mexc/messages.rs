//! MEXC REST payload shapes

use crate::models::indicators::Candle;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// `GET /api/v3/ticker/price` response
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    #[serde(default)]
    pub symbol: String,
    pub price: Value,
}

impl TickerPrice {
    pub fn price(&self) -> Option<f64> {
        number(&self.price).filter(|p| p.is_finite())
    }
}

/// MEXC sends numbers either as JSON numbers or as decimal strings.
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Convert one kline row `[openTime, open, high, low, close, volume, closeTime, ...]`.
///
/// Missing or unparsable fields become NaN so ingestion can drop the row.
pub fn kline_to_candle(row: &[Value]) -> Candle {
    let field = |i: usize| row.get(i).and_then(number).unwrap_or(f64::NAN);

    let open_time = row
        .first()
        .and_then(Value::as_i64)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or_default();

    Candle::new(field(1), field(2), field(3), field(4), field(5), open_time)
}

/// Parse a `GET /api/v3/klines` payload.
pub fn parse_klines(payload: &Value) -> Option<Vec<Candle>> {
    let rows = payload.as_array()?;
    Some(
        rows.iter()
            .map(|row| match row.as_array() {
                Some(fields) => kline_to_candle(fields),
                None => kline_to_candle(&[]),
            })
            .collect(),
    )
}
