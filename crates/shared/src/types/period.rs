//! Reporting periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ReconcileConfig;
use crate::error::{AppError, AppResult};

/// Identifier used when the input carries no period labels.
pub const UNKNOWN_PERIOD_ID: &str = "unknown";

/// Kind of reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// One calendar month.
    Monthly,
    /// One quarter.
    Quarterly,
    /// One year.
    Annual,
    /// Anything else.
    Custom,
}

impl PeriodKind {
    /// Infers the period kind from a column label such as `"1月"`,
    /// `"2025 Q1"`, or `"2024年"`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        if label.contains('月') || lowered.contains("month") {
            Self::Monthly
        } else if label.contains('季') || label.contains('Q') || lowered.contains("quarter") {
            Self::Quarterly
        } else if label.contains('年') || lowered.contains("year") || lowered.contains("annual") {
            Self::Annual
        } else {
            Self::Custom
        }
    }
}

/// A financial reporting period. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialPeriod {
    id: String,
    kind: PeriodKind,
    label: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl FinancialPeriod {
    /// Creates a period.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the id is blank.
    pub fn new(id: &str, kind: PeriodKind, label: Option<String>) -> AppResult<Self> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::InvalidInput(
                "period id cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            id: id.to_string(),
            kind,
            label,
            start_date: None,
            end_date: None,
        })
    }

    /// Returns a copy bounded by the given dates.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `start` is after `end`.
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidInput(format!(
                "period start {start} is after end {end}"
            )));
        }
        self.start_date = Some(start);
        self.end_date = Some(end);
        Ok(self)
    }

    /// The placeholder period used when no labels were detected.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            id: UNKNOWN_PERIOD_ID.to_string(),
            kind: PeriodKind::Custom,
            label: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Picks the statement's main period from the detected column labels.
    ///
    /// The first non-blank label that is not a percentage column wins; if
    /// every label is a percentage column the first label is used.
    #[must_use]
    pub fn detect(periods: &[String], config: &ReconcileConfig) -> Self {
        let main = periods
            .iter()
            .find(|p| !p.trim().is_empty() && !config.is_percentage_label(p))
            .or_else(|| periods.iter().find(|p| !p.trim().is_empty()));

        match main {
            Some(label) => Self {
                id: label.trim().to_string(),
                kind: PeriodKind::from_label(label),
                label: Some(label.clone()),
                start_date: None,
                end_date: None,
            },
            None => Self::unknown(),
        }
    }

    /// Period identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Period kind.
    #[must_use]
    pub const fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// Original display label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Start date, if known.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// End date, if known.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}
