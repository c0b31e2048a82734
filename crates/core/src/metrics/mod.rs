//! Profit metrics and restaurant cost ratios.

pub mod calculator;
pub mod error;

pub use calculator::MetricsCalculator;
pub use error::MetricsError;
