//! Per-user settings provider interface.

use super::market_data::ProviderError;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[async_trait::async_trait]
pub trait SettingsProvider {
    /// Extra entry discount in percent, `None` when the user has not set one
    async fn get_discount_pct(&self, user_id: &str) -> Result<Option<f64>, ProviderError>;
}

#[derive(Debug, Default)]
pub struct InMemorySettingsProvider {
    discounts: RwLock<HashMap<String, f64>>,
}

impl InMemorySettingsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_discount_pct(&self, user_id: &str, pct: f64) {
        self.discounts
            .write()
            .await
            .insert(user_id.to_string(), pct);
    }

    pub async fn clear_discount_pct(&self, user_id: &str) -> Option<f64> {
        self.discounts.write().await.remove(user_id)
    }
}

#[async_trait::async_trait]
impl SettingsProvider for InMemorySettingsProvider {
    async fn get_discount_pct(&self, user_id: &str) -> Result<Option<f64>, ProviderError> {
        Ok(self.discounts.read().await.get(user_id).copied())
    }
}
