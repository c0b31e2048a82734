//! Pipeline result object.

use serde::{Deserialize, Serialize};

use crate::quality::DataQualityScore;
use crate::reconcile::ReconcileError;
use crate::statement::IncomeStatement;
use crate::validation::ValidationResult;

/// Outcome of processing one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// A statement was produced and reconciliation recorded no errors.
    pub success: bool,
    /// The canonical statement; absent only when the input was unusable.
    pub statement: Option<IncomeStatement>,
    /// Rule findings for the statement.
    pub validation: ValidationResult,
    /// Quality verdict; absent only when there is no statement.
    pub quality: Option<DataQualityScore>,
    /// Reconciliation warnings in the order they were recorded.
    pub warnings: Vec<String>,
    /// Reconciliation and input errors in the order they were recorded.
    pub errors: Vec<String>,
}

impl PipelineResult {
    /// Result for input that could not be processed at all.
    #[must_use]
    pub fn failed(error: &ReconcileError) -> Self {
        Self {
            success: false,
            statement: None,
            validation: ValidationResult::default(),
            quality: None,
            warnings: Vec::new(),
            errors: vec![error.to_string()],
        }
    }

    /// Whether the statement passed every blocking rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.statement.is_some() && self.validation.is_valid()
    }

    /// One-line description of the run.
    #[must_use]
    pub fn summary(&self) -> String {
        match (&self.quality, self.success) {
            (Some(quality), true) => {
                format!("Pipeline succeeded (quality {})", quality.overall_percent())
            }
            _ if self.errors.is_empty() => "Pipeline failed".to_string(),
            _ => format!("Pipeline failed: {}", self.errors.join("; ")),
        }
    }
}
