use thiserror::Error;

/// Terminal failures of one engine run. None of them is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("insufficient data: need {required} candles, got {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("invalid candle payload: {0}")]
    InvalidCandle(String),

    #[error("invalid live price: {0}")]
    InvalidPrice(f64),

    #[error("indicator unavailable: {0} is not finite")]
    IndicatorUnavailable(&'static str),
}
