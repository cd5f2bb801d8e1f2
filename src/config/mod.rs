//! Environment-driven configuration for the collaborator layers.
//!
//! Engine constants live next to the code that uses them; only deployment
//! knobs are read here. Each getter has a `parse_*` twin that takes the raw
//! variable so the fallbacks can be checked without touching the process env.

use std::env;
use std::time::Duration;

pub const DEFAULT_ENVIRONMENT: &str = "sandbox";
pub const DEFAULT_MEXC_BASE_URL: &str = "https://api.mexc.com";
pub const DEFAULT_MARKET_DATA_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;
pub const DEFAULT_PORT: u16 = 8080;

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Deployment environment (`production`, `sandbox`, ...). Defaults to `sandbox`.
pub fn get_environment() -> String {
    parse_environment(env::var("ENVIRONMENT").ok().as_deref())
}

pub fn parse_environment(raw: Option<&str>) -> String {
    non_empty(raw)
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

pub fn get_mexc_base_url() -> String {
    parse_mexc_base_url(env::var("MEXC_BASE_URL").ok().as_deref())
}

pub fn parse_mexc_base_url(raw: Option<&str>) -> String {
    non_empty(raw)
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_MEXC_BASE_URL.to_string())
}

/// Timeout applied to every market data request
pub fn get_market_data_timeout() -> Duration {
    parse_market_data_timeout(env::var("MARKET_DATA_TIMEOUT_SECS").ok().as_deref())
}

/// Zero or unparsable values fall back to the default.
pub fn parse_market_data_timeout(raw: Option<&str>) -> Duration {
    let secs = non_empty(raw)
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(DEFAULT_MARKET_DATA_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Lookback used when a request does not name one
pub fn get_default_lookback_days() -> u32 {
    parse_default_lookback_days(env::var("DEFAULT_LOOKBACK_DAYS").ok().as_deref())
}

pub fn parse_default_lookback_days(raw: Option<&str>) -> u32 {
    non_empty(raw)
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LOOKBACK_DAYS)
}

pub fn get_port() -> u16 {
    parse_port(env::var("PORT").ok().as_deref())
}

pub fn parse_port(raw: Option<&str>) -> u16 {
    non_empty(raw)
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
