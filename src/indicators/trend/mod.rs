//! Trend indicators: SMA and the SMA cross classifier

pub mod classifier;
pub mod sma;

pub use classifier::*;
pub use sma::*;
