//! Unit tests for MEXC payload parsing

use dipline::services::mexc::messages::{kline_to_candle, number, parse_klines, TickerPrice};
use serde_json::json;

#[test]
fn test_number_accepts_strings_and_numbers() {
    assert_eq!(number(&json!("42.5")), Some(42.5));
    assert_eq!(number(&json!(42.5)), Some(42.5));
    assert_eq!(number(&json!(" 7 ")), Some(7.0));
    assert!(number(&json!("abc")).is_none());
    assert!(number(&json!(null)).is_none());
}

#[test]
fn test_kline_row_to_candle() {
    let row = json!([1700000000000i64, "100.0", "110.5", "95.25", "105.0", "1234.5", 1700086399999i64]);
    let candle = kline_to_candle(row.as_array().unwrap());

    assert_eq!(candle.open, 100.0);
    assert_eq!(candle.high, 110.5);
    assert_eq!(candle.low, 95.25);
    assert_eq!(candle.close, 105.0);
    assert_eq!(candle.volume, 1234.5);
    assert_eq!(candle.open_time.timestamp_millis(), 1700000000000);
    assert!(candle.is_valid());
}

#[test]
fn test_malformed_row_is_invalid() {
    let row = json!([1700000000000i64, "100.0", "oops", "95.25"]);
    let candle = kline_to_candle(row.as_array().unwrap());
    assert!(candle.high.is_nan());
    assert!(candle.close.is_nan());
    assert!(!candle.is_valid());
}

#[test]
fn test_parse_klines_requires_array() {
    assert!(parse_klines(&json!({"code": 1})).is_none());
    assert_eq!(parse_klines(&json!([])).unwrap().len(), 0);

    let candles = parse_klines(&json!([[0, "1", "2", "0.5", "1.5", "10"], "junk"])).unwrap();
    assert_eq!(candles.len(), 2);
    assert!(candles[0].is_valid());
    assert!(!candles[1].is_valid());
}

#[test]
fn test_ticker_price() {
    let ticker: TickerPrice = serde_json::from_value(json!({"symbol": "BTCUSDT", "price": "43250.50"})).unwrap();
    assert_eq!(ticker.price(), Some(43250.5));

    let ticker: TickerPrice = serde_json::from_value(json!({"symbol": "BTCUSDT", "price": "n/a"})).unwrap();
    assert!(ticker.price().is_none());
}

#[test]
fn test_ticker_without_symbol() {
    let ticker: TickerPrice = serde_json::from_value(json!({"price": 1.25})).unwrap();
    assert_eq!(ticker.symbol, "");
    assert_eq!(ticker.price(), Some(1.25));
}
