//! Pipeline service.

use menuledger_shared::PipelineConfig;
use rayon::prelude::*;
use tracing::{info, warn};

use super::types::PipelineResult;
use crate::diagnostics::Diagnostics;
use crate::metrics::MetricsCalculator;
use crate::quality::{DataQualityScore, QualityScorer};
use crate::reconcile::{ParseOutcome, RawStatement, Reconciler};
use crate::statement::IncomeStatement;
use crate::validation::{RuleEngine, ValidationResult};

/// Turns parsed statements into validated, scored results.
///
/// Holds only read-only configuration and rules, so one instance can
/// process many statements concurrently.
#[derive(Debug, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    reconciler: Reconciler,
    engine: RuleEngine,
    scorer: QualityScorer,
}

impl Pipeline {
    /// Creates a pipeline with the built-in rules.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reconciler: Reconciler::new(config.reconcile.clone()),
            scorer: QualityScorer::new(config.scoring.clone()),
            engine: RuleEngine::with_default_rules(),
            config,
        }
    }

    /// The configuration this pipeline was built from.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The rule engine, for adding or removing rules.
    pub fn rules_mut(&mut self) -> &mut RuleEngine {
        &mut self.engine
    }

    /// Processes one parsed statement.
    ///
    /// Business-data defects never fail the run; they show up as
    /// warnings, errors, issues and a lower score.
    #[must_use]
    pub fn process(&self, raw: &RawStatement) -> PipelineResult {
        if let Err(e) = raw.ensure_not_empty() {
            warn!(error = %e, "Skipping unusable statement");
            return PipelineResult::failed(&e);
        }

        let mut diagnostics = Diagnostics::new();
        let reconciled = self.reconciler.reconcile(raw, &mut diagnostics);
        let metrics = MetricsCalculator::calculate(
            &reconciled.revenue,
            &reconciled.costs,
            &reconciled.expenses,
            &mut diagnostics,
        );

        let mut statement = IncomeStatement::new(
            reconciled.period,
            reconciled.revenue,
            reconciled.costs,
            reconciled.expenses,
            metrics,
        );
        statement.restaurant_name.clone_from(&raw.restaurant_name);
        statement.source.clone_from(&raw.source);

        let (validation, quality) = self.validate_statement(&statement);

        info!(
            period = %statement.period.id(),
            is_valid = validation.is_valid(),
            overall_score = %quality.overall,
            issues = validation.issues.len(),
            "Processed income statement"
        );

        let (warnings, errors) = diagnostics.into_parts();
        PipelineResult {
            success: errors.is_empty(),
            statement: Some(statement),
            validation,
            quality: Some(quality),
            warnings,
            errors,
        }
    }

    /// Processes the upstream parse result; a failed parse yields a
    /// failure result with no statement.
    #[must_use]
    pub fn process_outcome(&self, outcome: &ParseOutcome) -> PipelineResult {
        match outcome.raw_statement() {
            Ok(raw) => self.process(raw),
            Err(e) => {
                warn!(error = %e, "Skipping unusable statement");
                PipelineResult::failed(&e)
            }
        }
    }

    /// Processes independent statements in parallel. Results keep input order.
    #[must_use]
    pub fn process_batch(&self, outcomes: &[ParseOutcome]) -> Vec<PipelineResult> {
        outcomes
            .par_iter()
            .map(|outcome| self.process_outcome(outcome))
            .collect()
    }

    /// Validates and scores an already canonical statement.
    #[must_use]
    pub fn validate_statement(&self, statement: &IncomeStatement) -> (ValidationResult, DataQualityScore) {
        let validation = self.engine.validate(statement);
        let quality = self.scorer.score(statement, &validation);
        (validation, quality)
    }
}
