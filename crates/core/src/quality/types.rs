//! Quality score types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trustworthiness of one extracted statement.
///
/// Every score lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityScore {
    /// Weighted combination of completeness, accuracy and consistency.
    pub overall: Decimal,
    /// Share of the completeness checklist satisfied.
    pub completeness: Decimal,
    /// One minus the normalized severity penalty of validation issues.
    pub accuracy: Decimal,
    /// Share of recomputation checks passed.
    pub consistency: Decimal,
    /// Revenue breakdown quality.
    pub revenue_quality: Decimal,
    /// Cost breakdown quality.
    pub cost_quality: Decimal,
    /// Expense breakdown quality.
    pub expense_quality: Decimal,
    /// Critical fields that are exactly zero.
    pub missing_fields: Vec<String>,
    /// Advisory descriptions of implausible values.
    pub suspicious_values: Vec<String>,
    /// Validation messages that mention a calculation.
    pub calculation_errors: Vec<String>,
}

impl DataQualityScore {
    /// Overall score as a percentage string, e.g. `72.5%`.
    #[must_use]
    pub fn overall_percent(&self) -> String {
        menuledger_shared::types::format_percent(self.overall)
    }
}
