//! Integration tests for the entry service

use chrono::{TimeZone, Utc};
use dipline::engine::EngineError;
use dipline::metrics::Metrics;
use dipline::models::Trend;
use dipline::services::{
    EntryOutcome, EntryRequest, EntryService, InMemorySettingsProvider, ServiceError,
    StaticMarketDataProvider,
};
use std::sync::Arc;

use crate::test_utils::{create_uptrend_candles, FailingMarketDataProvider, FailingSettingsProvider};

fn service(settings: Option<Arc<InMemorySettingsProvider>>, metrics: Option<Arc<Metrics>>) -> EntryService {
    let market_data = StaticMarketDataProvider::new()
        .with_symbol("ETH", create_uptrend_candles(200), 200.0)
        .with_symbol("THIN", create_uptrend_candles(30), 115.0);
    let settings = settings.map(|s| s as Arc<dyn dipline::services::SettingsProvider + Send + Sync>);
    EntryService::new(Arc::new(market_data), settings, metrics).with_default_lookback_days(90)
}

fn computed(outcome: EntryOutcome) -> dipline::models::EngineResult {
    match outcome {
        EntryOutcome::Computed(result) => result,
        EntryOutcome::Skipped { week_key } => panic!("unexpected skip for {}", week_key),
    }
}

#[tokio::test]
async fn computes_entries_for_known_symbol() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    let svc = service(None, None);

    let mut request = EntryRequest::new(" eth ");
    request.lookback_days = Some(120.0);
    let result = computed(svc.compute_at(&request, now).await.unwrap());

    assert_eq!(result.symbol, "ETH");
    assert_eq!(result.trend, Trend::Up);
    assert_eq!(result.live_price, 200.0);
    assert_eq!(result.computed_at_week_key, "2026-W43");
    assert_eq!(result.user_discount_pct, 0.0);
    // swing range spans the 120-day window only
    assert!((result.indicators.swing_low - (100.0 + 80.0 * 0.5 + 0.1)).abs() < 1e-9);
}

#[tokio::test]
async fn skips_when_week_already_computed() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    let svc = service(None, None);

    let mut request = EntryRequest::new("ETH");
    request.last_week_key = Some("2026-W43".to_string());
    match svc.compute_at(&request, now).await.unwrap() {
        EntryOutcome::Skipped { week_key } => assert_eq!(week_key, "2026-W43"),
        EntryOutcome::Computed(_) => panic!("expected skip"),
    }

    request.force = true;
    computed(svc.compute_at(&request, now).await.unwrap());

    request.force = false;
    request.last_week_key = Some("2026-W42".to_string());
    computed(svc.compute_at(&request, now).await.unwrap());
}

#[tokio::test]
async fn user_discount_is_read_and_clamped() {
    let settings = Arc::new(InMemorySettingsProvider::new());
    settings.set_discount_pct("greedy", 80.0).await;
    let svc = service(Some(settings), None);

    let mut request = EntryRequest::new("ETH");
    request.user_id = Some("greedy".to_string());
    let result = computed(svc.compute(&request).await.unwrap());
    assert_eq!(result.user_discount_pct, 50.0);

    request.user_id = Some("nobody".to_string());
    let result = computed(svc.compute(&request).await.unwrap());
    assert_eq!(result.user_discount_pct, 0.0);
}

#[tokio::test]
async fn rejects_invalid_requests() {
    let svc = service(None, None);

    let err = svc.compute(&EntryRequest::new("")).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRequest(_)));

    let mut request = EntryRequest::new("ETH");
    request.lookback_days = Some(366.0);
    let err = svc.compute(&request).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRequest(_)));

    for days in [90.5, -5.0, 59.0] {
        request.lookback_days = Some(days);
        let err = svc.compute(&request).await.unwrap_err();
        assert!(err.to_string().contains("invalid lookbackDays"), "{}", err);
    }
}

#[tokio::test]
async fn propagates_engine_errors() {
    let svc = service(None, None);
    let err = svc.compute(&EntryRequest::new("THIN")).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Engine(EngineError::InsufficientData {
            required: 60,
            available: 30
        })
    ));
}

#[tokio::test]
async fn propagates_upstream_failures() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let svc = EntryService::new(Arc::new(FailingMarketDataProvider), None, Some(metrics.clone()));

    let err = svc.compute(&EntryRequest::new("BTC")).await.unwrap_err();
    match err {
        ServiceError::MarketData(msg) => assert!(msg.contains("upstream unavailable")),
        other => panic!("unexpected error: {}", other),
    }

    let exported = metrics.export().unwrap();
    assert!(exported.contains("entry_computations_total{outcome=\"failed\"} 1"));
}

#[tokio::test]
async fn unreachable_settings_fall_back_to_no_discount() {
    let market_data = StaticMarketDataProvider::new().with_symbol("ETH", create_uptrend_candles(200), 200.0);
    let svc = EntryService::new(Arc::new(market_data), Some(Arc::new(FailingSettingsProvider)), None)
        .with_default_lookback_days(90);

    let mut request = EntryRequest::new("ETH");
    request.user_id = Some("user-1".to_string());
    let result = computed(svc.compute(&request).await.unwrap());
    assert_eq!(result.user_discount_pct, 0.0);
}
