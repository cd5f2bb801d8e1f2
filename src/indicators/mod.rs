//! Indicator primitives grouped by category.
//!
//! Every function here is pure and returns `None` when the input is too
//! short to produce a meaningful value.

pub mod structure;
pub mod trend;
pub mod volatility;

pub use structure::*;
pub use trend::*;
pub use volatility::*;
