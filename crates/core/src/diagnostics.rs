//! Warning and error accumulator for a single pipeline run.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Warnings and errors collected while building one statement.
///
/// Passed by `&mut` through each stage; never shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Diagnostics {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "Reconciliation warning");
        self.warnings.push(message);
    }

    /// Records an error.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!(%message, "Reconciliation error");
        self.errors.push(message);
    }

    /// Warnings in the order they were recorded.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Errors in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns true if any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Splits into `(warnings, errors)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.warnings, self.errors)
    }
}
