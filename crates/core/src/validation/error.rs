//! Rule execution errors.

use thiserror::Error;

/// Internal failure of a single validation rule.
///
/// The engine turns it into a `<CODE>_EXECUTION_ERROR` issue; it never
/// stops the remaining rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// An intermediate value exceeded the decimal range.
    #[error("Arithmetic overflow while computing {operation}")]
    Overflow {
        /// Value being computed.
        operation: &'static str,
    },

    /// A ratio had a zero denominator.
    #[error("Division by zero while computing {operation}")]
    DivisionByZero {
        /// Value being computed.
        operation: &'static str,
    },

    /// Any other failure reported by a custom rule.
    #[error("{0}")]
    Failed(String),
}
