//! Validation issue and result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational.
    Info,
    /// Worth reviewing.
    Warning,
    /// Data is wrong or the business is in trouble.
    Error,
    /// Data is unusable.
    Critical,
}

impl Severity {
    /// Largest weight any severity carries.
    pub const MAX_WEIGHT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

    /// Accuracy penalty weight.
    #[must_use]
    pub const fn weight(self) -> Decimal {
        match self {
            Self::Info => Decimal::ZERO,
            Self::Warning => Decimal::from_parts(1, 0, 0, false, 1),
            Self::Error => Decimal::from_parts(3, 0, 0, false, 1),
            Self::Critical => Self::MAX_WEIGHT,
        }
    }

    /// Returns true for ERROR and CRITICAL.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Error | Self::Critical)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A finding produced by a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity.
    pub severity: Severity,
    /// Issue code, prefixed with the rule code (e.g. `COST_001_HIGH_FOOD_COST`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Statement field the issue refers to.
    pub field: Option<String>,
    /// Value that triggered the issue.
    pub value: Option<Decimal>,
    /// Suggested remedy.
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates an issue with no field, value or suggestion.
    #[must_use]
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            field: None,
            value: None,
            suggestion: None,
        }
    }

    /// Sets the field.
    #[must_use]
    pub fn with_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    /// Sets the offending value.
    #[must_use]
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Ordered outcome of running every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Issues in rule order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Wraps a list of issues.
    #[must_use]
    pub const fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// True iff no issue is ERROR or CRITICAL.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity.is_blocking())
    }

    /// Number of ERROR and CRITICAL issues.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity.is_blocking()).count()
    }

    /// Number of WARNING issues.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Issues whose code starts with `prefix`.
    pub fn issues_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a ValidationIssue> + 'a {
        self.issues.iter().filter(move |i| i.code.starts_with(prefix))
    }
}
