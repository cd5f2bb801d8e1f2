//! Test utilities for API server integration tests

use axum_test::TestServer;
use dipline::core::http::{create_router, AppState, HealthStatus};
use dipline::metrics::Metrics;
use dipline::services::{EntryService, InMemorySettingsProvider, StaticMarketDataProvider};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::test_utils::create_uptrend_candles;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub settings: Arc<InMemorySettingsProvider>,
}

impl TestApiServer {
    /// Server with an entry service over fixed market data:
    /// `BTC` (120 rising days), `THIN` (40 days) and `ZERO` (live price 0)
    pub async fn new() -> Self {
        let market_data = StaticMarketDataProvider::new()
            .with_symbol("BTC", create_uptrend_candles(120), 160.0)
            .with_symbol("THIN", create_uptrend_candles(40), 120.0)
            .with_symbol("ZERO", create_uptrend_candles(120), 0.0);
        let settings = Arc::new(InMemorySettingsProvider::new());
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));

        let service = EntryService::new(
            Arc::new(market_data),
            Some(settings.clone()),
            Some(metrics.clone()),
        )
        .with_default_lookback_days(90);

        Self::build(metrics, settings, Some(Arc::new(service)))
    }

    /// Server without an entry service configured
    pub async fn without_service() -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        Self::build(metrics, Arc::new(InMemorySettingsProvider::new()), None)
    }

    fn build(
        metrics: Arc<Metrics>,
        settings: Arc<InMemorySettingsProvider>,
        entry_service: Option<Arc<EntryService>>,
    ) -> Self {
        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            entry_service,
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            settings,
        }
    }
}
