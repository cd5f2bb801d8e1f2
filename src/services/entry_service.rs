//! One recompute request: collaborators in, engine result out.
//!
//! Market data failures are propagated as-is and retries belong to the caller.
//! A failing settings lookup only costs the user discount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::market_data::MarketDataProvider;
use super::settings::SettingsProvider;
use crate::config;
use crate::engine::{
    compute_entries, should_recompute, week_key, EngineError, EngineInput, MAX_LOOKBACK_DAYS,
    MIN_LOOKBACK_DAYS,
};
use crate::metrics::Metrics;
use crate::models::entry::EngineResult;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("market data error: {0}")]
    MarketData(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[serde(default)]
    pub symbol: String,
    /// Whole number of days in `60..=365`; anything else is rejected
    #[serde(default)]
    pub lookback_days: Option<f64>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub force: bool,
    /// Week key of the last stored result for this symbol, if any
    #[serde(default)]
    pub last_week_key: Option<String>,
}

impl EntryRequest {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EntryOutcome {
    Computed(EngineResult),
    Skipped {
        #[serde(rename = "weekKey")]
        week_key: String,
    },
}

impl EntryOutcome {
    fn label(&self) -> &'static str {
        match self {
            EntryOutcome::Computed(_) => "computed",
            EntryOutcome::Skipped { .. } => "skipped",
        }
    }
}

pub struct EntryService {
    market_data: Arc<dyn MarketDataProvider + Send + Sync>,
    settings: Option<Arc<dyn SettingsProvider + Send + Sync>>,
    metrics: Option<Arc<Metrics>>,
    default_lookback_days: u32,
}

impl EntryService {
    pub fn new(
        market_data: Arc<dyn MarketDataProvider + Send + Sync>,
        settings: Option<Arc<dyn SettingsProvider + Send + Sync>>,
        metrics: Option<Arc<Metrics>>,
    ) -> Self {
        Self {
            market_data,
            settings,
            metrics,
            default_lookback_days: config::get_default_lookback_days(),
        }
    }

    pub fn with_default_lookback_days(mut self, days: u32) -> Self {
        self.default_lookback_days = days;
        self
    }

    pub async fn compute(&self, request: &EntryRequest) -> Result<EntryOutcome, ServiceError> {
        self.compute_at(request, Utc::now()).await
    }

    /// Same as [`compute`](Self::compute) with an explicit clock.
    pub async fn compute_at(
        &self,
        request: &EntryRequest,
        now: DateTime<Utc>,
    ) -> Result<EntryOutcome, ServiceError> {
        let start = Instant::now();
        let result = self.run(request, now).await;

        if let Some(ref metrics) = self.metrics {
            let outcome = match &result {
                Ok(outcome) => outcome.label(),
                Err(_) => "failed",
            };
            metrics.record_outcome(outcome);
            metrics
                .entry_computation_duration_seconds
                .observe(start.elapsed().as_secs_f64());
        }

        result
    }

    async fn run(&self, request: &EntryRequest, now: DateTime<Utc>) -> Result<EntryOutcome, ServiceError> {
        let symbol = request.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ServiceError::InvalidRequest("symbol missing".to_string()));
        }

        let lookback_days = resolve_lookback_days(request.lookback_days, self.default_lookback_days)?;

        let current_week = week_key(now);
        if !should_recompute(request.last_week_key.as_deref(), &current_week, request.force) {
            debug!(symbol = %symbol, week = %current_week, "entries already computed this week, skipping");
            return Ok(EntryOutcome::Skipped {
                week_key: current_week,
            });
        }

        let user_discount_pct = match (&self.settings, &request.user_id) {
            (Some(settings), Some(user_id)) => match settings.get_discount_pct(user_id).await {
                Ok(pct) => pct,
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "discount lookup failed, using no discount");
                    None
                }
            },
            _ => None,
        };

        let live_price = self
            .market_data
            .get_live_price(&symbol)
            .await
            .map_err(|e| ServiceError::MarketData(e.to_string()))?;

        let candles = self
            .market_data
            .get_daily_candles(&symbol, lookback_days)
            .await
            .map_err(|e| ServiceError::MarketData(e.to_string()))?;

        let input = EngineInput {
            symbol: symbol.clone(),
            lookback_days,
            candles,
            live_price,
            user_discount_pct,
        };

        let result = compute_entries(&input, now).map_err(|e| {
            warn!(symbol = %symbol, error = %e, "entry computation failed");
            e
        })?;

        info!(
            symbol = %symbol,
            trend = %result.trend,
            live_price = result.live_price,
            ex1 = result.entries[0].price,
            ex2 = result.entries[1].price,
            ex3 = result.entries[2].price,
            week = %result.computed_at_week_key,
            "entries computed for {}",
            symbol
        );

        Ok(EntryOutcome::Computed(result))
    }
}

fn resolve_lookback_days(requested: Option<f64>, default: u32) -> Result<u32, ServiceError> {
    let days = requested.unwrap_or_else(|| f64::from(default));
    let range = f64::from(MIN_LOOKBACK_DAYS)..=f64::from(MAX_LOOKBACK_DAYS);
    if days.fract() != 0.0 || !range.contains(&days) {
        return Err(ServiceError::InvalidRequest(format!(
            "invalid lookbackDays {} ({}..{})",
            days, MIN_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS
        )));
    }
    Ok(days as u32)
}
