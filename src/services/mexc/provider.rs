//! MEXC market data provider implementation

use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::messages::{parse_klines, TickerPrice};
use crate::config;
use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider, ProviderError};

pub const DEFAULT_QUOTE_ASSET: &str = "USDT";

pub struct MexcMarketDataProvider {
    client: Client,
    base_url: String,
    quote_asset: String,
}

impl MexcMarketDataProvider {
    /// Provider against `MEXC_BASE_URL` with the configured request timeout
    pub fn new() -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .timeout(config::get_market_data_timeout())
            .build()?;
        Ok(Self::with_client(config::get_mexc_base_url(), client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            quote_asset: DEFAULT_QUOTE_ASSET.to_string(),
        }
    }

    pub fn with_quote_asset(mut self, quote_asset: &str) -> Self {
        self.quote_asset = quote_asset.trim().to_uppercase();
        self
    }

    /// `btc` -> `BTCUSDT`
    pub fn market_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol.trim().to_uppercase(), self.quote_asset)
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, MarketDataError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        debug!(url = %url, "MEXC request");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MarketDataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| MarketDataError::Malformed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for MexcMarketDataProvider {
    async fn get_daily_candles(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<Vec<Candle>, ProviderError> {
        let market = self.market_symbol(symbol);
        let payload = self
            .get_json(
                "/api/v3/klines",
                &[
                    ("symbol", market.clone()),
                    ("interval", "1d".to_string()),
                    ("limit", lookback_days.to_string()),
                ],
            )
            .await?;

        let candles = parse_klines(&payload).ok_or_else(|| {
            MarketDataError::Malformed(format!("expected kline array for {}", market))
        })?;

        debug!(symbol = %market, count = candles.len(), "MEXC klines fetched");
        Ok(candles)
    }

    async fn get_live_price(&self, symbol: &str) -> Result<f64, ProviderError> {
        let market = self.market_symbol(symbol);
        let payload = self
            .get_json("/api/v3/ticker/price", &[("symbol", market.clone())])
            .await?;

        let ticker: TickerPrice = serde_json::from_value(payload)
            .map_err(|e| MarketDataError::Malformed(e.to_string()))?;
        let price = ticker.price().ok_or_else(|| {
            MarketDataError::Malformed(format!("non-numeric ticker price for {}", ticker.symbol))
        })?;

        Ok(price)
    }
}
