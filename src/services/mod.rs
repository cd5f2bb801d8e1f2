//! Collaborators around the engine: market data, user settings and the
//! request orchestration that ties them together.

pub mod entry_service;
pub mod market_data;
pub mod mexc;
pub mod settings;

pub use entry_service::{EntryOutcome, EntryRequest, EntryService, ServiceError};
pub use market_data::{MarketDataError, MarketDataProvider, StaticMarketDataProvider};
pub use mexc::MexcMarketDataProvider;
pub use settings::{InMemorySettingsProvider, SettingsProvider};
