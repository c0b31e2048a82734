//! Metrics calculation errors.

use thiserror::Error;

/// Arithmetic failures while deriving metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// An intermediate result exceeded the decimal range.
    #[error("Arithmetic overflow while computing {operation}")]
    Overflow {
        /// Metric or intermediate value being computed.
        operation: &'static str,
    },
}
