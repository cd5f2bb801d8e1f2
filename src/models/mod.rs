//! Shared data models spanning the engine layers.

pub mod entry;
pub mod indicators;

pub use entry::{EngineResult, EntryLevel, EntrySuggestion};
pub use indicators::{Candle, Indicators, Trend};
