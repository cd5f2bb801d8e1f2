//! Market structure: swing range and Fibonacci retracements

pub mod fibonacci;
pub mod swing;

pub use fibonacci::*;
pub use swing::*;
