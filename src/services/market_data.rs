//! Market data provider interface.

use crate::models::indicators::Candle;
use std::collections::HashMap;
use thiserror::Error;

pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed upstream payload: {0}")]
    Malformed(String),

    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
}

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Daily candles for a symbol, oldest first
    async fn get_daily_candles(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<Vec<Candle>, ProviderError>;

    /// Current traded price for a symbol
    async fn get_live_price(&self, symbol: &str) -> Result<f64, ProviderError>;
}

/// Provider serving fixed data, keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketDataProvider {
    candles: HashMap<String, Vec<Candle>>,
    prices: HashMap<String, f64>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: &str, candles: Vec<Candle>, live_price: f64) -> Self {
        let key = symbol.to_uppercase();
        self.candles.insert(key.clone(), candles);
        self.prices.insert(key, live_price);
        self
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_daily_candles(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<Vec<Candle>, ProviderError> {
        let candles = self
            .candles
            .get(&symbol.to_uppercase())
            .ok_or_else(|| MarketDataError::UnknownSymbol(symbol.to_string()))?;

        let start = candles.len().saturating_sub(lookback_days as usize);
        Ok(candles[start..].to_vec())
    }

    async fn get_live_price(&self, symbol: &str) -> Result<f64, ProviderError> {
        self.prices
            .get(&symbol.to_uppercase())
            .copied()
            .ok_or_else(|| MarketDataError::UnknownSymbol(symbol.to_string()).into())
    }
}
