//! Structural input errors.

use thiserror::Error;

/// Input that cannot be reconciled at all.
///
/// Business-data defects are diagnostics, not errors; only a missing
/// or failed parse ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The upstream parser reported a failure.
    #[error("Parse failed: {reason}")]
    ParseFailed {
        /// Parser's reason.
        reason: String,
    },

    /// The parsed statement has no entries.
    #[error("Parsed statement contains no entries")]
    EmptyInput,
}
