//! Entry-price suggestion engine.
//!
//! Turns a daily candle history plus a live price into a trend label,
//! a handful of indicators and three graduated buy-the-dip entry levels.

pub mod common;
pub mod config;
pub mod core;
pub mod engine;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
