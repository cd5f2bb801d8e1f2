//! Fibonacci retracement levels

use super::swing::SwingRange;

pub const FIB_618: f64 = 0.618;
pub const FIB_786: f64 = 0.786;

/// Retracement measured down from the swing high.
pub fn retracement(high: f64, low: f64, ratio: f64) -> f64 {
    high - (high - low) * ratio
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FibonacciLevels {
    pub fib618: f64,
    pub fib786: f64,
}

/// 61.8% and 78.6% retracements of a swing range.
///
/// For `high >= low` the result satisfies `low <= fib786 <= fib618 <= high`.
pub fn calculate_fibonacci_levels(swing: SwingRange) -> FibonacciLevels {
    FibonacciLevels {
        fib618: retracement(swing.high, swing.low, FIB_618),
        fib786: retracement(swing.high, swing.low, FIB_786),
    }
}
