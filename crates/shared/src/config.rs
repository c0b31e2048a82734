//! Pipeline configuration management.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Pipeline configuration.
///
/// Every field has a default, so an empty source yields the reference
/// behaviour. The config is read-only during a run and shared by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Reconciliation settings.
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    /// Quality scoring settings.
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Reconciliation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Substrings that mark a period column as a percentage column.
    /// Matching is case-insensitive.
    #[serde(default = "default_percentage_markers")]
    pub percentage_markers: Vec<String>,
}

fn default_percentage_markers() -> Vec<String> {
    vec!["占比".to_string(), "%".to_string()]
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            percentage_markers: default_percentage_markers(),
        }
    }
}

impl ReconcileConfig {
    /// Returns true if `label` names a percentage column.
    #[must_use]
    pub fn is_percentage_label(&self, label: &str) -> bool {
        let lowered = label.to_lowercase();
        self.percentage_markers
            .iter()
            .any(|marker| lowered.contains(&marker.to_lowercase()))
    }
}

/// How the consistency score treats the margin check when revenue is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroRevenueConsistency {
    /// The skipped check leaves the denominator (divide by 2).
    #[default]
    Exclude,
    /// The skipped check counts as failed (divide by 3).
    Penalize,
}

/// Weights for the overall quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Completeness weight.
    #[serde(default = "default_completeness_weight")]
    pub completeness: Decimal,
    /// Accuracy weight.
    #[serde(default = "default_accuracy_weight")]
    pub accuracy: Decimal,
    /// Consistency weight.
    #[serde(default = "default_consistency_weight")]
    pub consistency: Decimal,
}

fn default_completeness_weight() -> Decimal {
    Decimal::new(3, 1)
}

fn default_accuracy_weight() -> Decimal {
    Decimal::new(4, 1)
}

fn default_consistency_weight() -> Decimal {
    Decimal::new(3, 1)
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completeness: default_completeness_weight(),
            accuracy: default_accuracy_weight(),
            consistency: default_consistency_weight(),
        }
    }
}

/// Quality scoring settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Denominator of the completeness score.
    ///
    /// Defaults to the size of the completeness checklist (10). Set it to
    /// 20 to reproduce the legacy "expected key fields" constant.
    #[serde(default = "default_completeness_denominator")]
    pub completeness_denominator: u32,
    /// Treatment of the skipped margin check under zero revenue.
    #[serde(default)]
    pub zero_revenue_consistency: ZeroRevenueConsistency,
    /// Overall score weights.
    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_completeness_denominator() -> u32 {
    10
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            completeness_denominator: default_completeness_denominator(),
            zero_revenue_consistency: ZeroRevenueConsistency::default(),
            weights: ScoreWeights::default(),
        }
    }
}

impl PipelineConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `MENULEDGER__*`
    /// environment variables (e.g. `MENULEDGER__SCORING__COMPLETENESS_DENOMINATOR=20`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MENULEDGER")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("reconcile.percentage_markers")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks invariants the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a setting is out of range.
    pub fn validate(&self) -> AppResult<()> {
        if self.scoring.completeness_denominator == 0 {
            return Err(AppError::Config(
                "scoring.completeness_denominator must be positive".to_string(),
            ));
        }

        let weights = &self.scoring.weights;
        if [weights.completeness, weights.accuracy, weights.consistency]
            .iter()
            .any(Decimal::is_sign_negative)
        {
            return Err(AppError::Config(
                "scoring.weights must not be negative".to_string(),
            ));
        }

        let total = weights.completeness + weights.accuracy + weights.consistency;
        if total != Decimal::ONE {
            return Err(AppError::Config(format!(
                "scoring.weights must sum to 1, got {total}"
            )));
        }

        if self.reconcile.percentage_markers.iter().any(String::is_empty) {
            return Err(AppError::Config(
                "reconcile.percentage_markers must not contain empty markers".to_string(),
            ));
        }

        Ok(())
    }
}
