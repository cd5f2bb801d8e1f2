use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::indicators::{Indicators, Trend};

/// Depth of an entry suggestion, from the nearest dip to the deepest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryLevel {
    #[serde(rename = "EX1")]
    Near,
    #[serde(rename = "EX2")]
    Mid,
    #[serde(rename = "EX3")]
    Deep,
}

impl EntryLevel {
    pub const ALL: [EntryLevel; 3] = [EntryLevel::Near, EntryLevel::Mid, EntryLevel::Deep];

    pub fn name(&self) -> &'static str {
        match self {
            EntryLevel::Near => "EX1",
            EntryLevel::Mid => "EX2",
            EntryLevel::Deep => "EX3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySuggestion {
    pub name: EntryLevel,
    pub price: f64,
    pub pct_under_live: f64,
}

impl EntrySuggestion {
    pub fn new(name: EntryLevel, price: f64, live_price: f64) -> Self {
        Self {
            name,
            price,
            pct_under_live: (1.0 - price / live_price) * 100.0,
        }
    }
}

/// Complete output of one engine run; this is the shape that gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineResult {
    pub symbol: String,
    pub trend: Trend,
    #[serde(flatten)]
    pub indicators: Indicators,
    pub entries: [EntrySuggestion; 3],
    pub live_price: f64,
    pub user_discount_pct: f64,
    pub computed_at: DateTime<Utc>,
    pub computed_at_week_key: String,
}

impl EngineResult {
    pub fn entry(&self, level: EntryLevel) -> &EntrySuggestion {
        match level {
            EntryLevel::Near => &self.entries[0],
            EntryLevel::Mid => &self.entries[1],
            EntryLevel::Deep => &self.entries[2],
        }
    }
}
