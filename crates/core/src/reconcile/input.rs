//! Input boundary: labeled entries produced by the spreadsheet parser.

use serde::{Deserialize, Serialize};

use super::error::ReconcileError;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell.
    Number(f64),
    /// A text cell; may still hold a number such as `"12,000"`.
    Text(String),
    /// An empty cell.
    Empty,
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "'{s}'"),
            Self::Empty => write!(f, "<empty>"),
        }
    }
}

/// One period column of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodValue {
    /// Column label, e.g. `"1月"` or `"占比"`.
    pub period: String,
    /// Cell content.
    pub value: CellValue,
}

impl PeriodValue {
    /// Creates a numeric period value.
    #[must_use]
    pub fn number(period: &str, value: f64) -> Self {
        Self {
            period: period.to_string(),
            value: CellValue::Number(value),
        }
    }

    /// Creates a text period value.
    #[must_use]
    pub fn text(period: &str, value: &str) -> Self {
        Self {
            period: period.to_string(),
            value: CellValue::Text(value.to_string()),
        }
    }
}

/// A labeled row of the source sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Canonical field name (`total_revenue`, `labor_cost`, ...) or, when
    /// the term dictionary did not recognise the row, the original label.
    pub term: String,
    /// Row label as it appeared in the sheet.
    pub source_label: String,
    /// Values by period, in column order.
    pub values: Vec<PeriodValue>,
}

impl RawEntry {
    /// Creates an entry whose source label equals its term.
    #[must_use]
    pub fn new(term: &str, values: Vec<PeriodValue>) -> Self {
        Self {
            term: term.to_string(),
            source_label: term.to_string(),
            values,
        }
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source_label(mut self, label: &str) -> Self {
        self.source_label = label.to_string();
        self
    }
}

/// Everything the parser extracted from one statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStatement {
    /// Labeled rows in sheet order.
    #[serde(default)]
    pub entries: Vec<RawEntry>,
    /// Detected period column labels in sheet order.
    #[serde(default)]
    pub periods: Vec<String>,
    /// Reference to the source file or sheet.
    #[serde(default)]
    pub source: Option<String>,
    /// Restaurant display name.
    #[serde(default)]
    pub restaurant_name: Option<String>,
}

/// Result of the upstream parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ParseOutcome {
    /// The sheet was parsed.
    Parsed(RawStatement),
    /// The sheet could not be parsed.
    Failed {
        /// Why parsing failed.
        reason: String,
    },
}

impl RawStatement {
    /// Returns `EmptyInput` when there is nothing to reconcile.
    pub fn ensure_not_empty(&self) -> Result<&Self, ReconcileError> {
        if self.entries.is_empty() {
            return Err(ReconcileError::EmptyInput);
        }
        Ok(self)
    }
}

impl ParseOutcome {
    /// The parsed statement, or the reason there is none.
    pub fn raw_statement(&self) -> Result<&RawStatement, ReconcileError> {
        match self {
            Self::Parsed(raw) => raw.ensure_not_empty(),
            Self::Failed { reason } => Err(ReconcileError::ParseFailed {
                reason: reason.clone(),
            }),
        }
    }
}
