//! Quality scorer.

use menuledger_shared::config::{ScoringConfig, ZeroRevenueConsistency};
use menuledger_shared::types::format_percent;
use rust_decimal::Decimal;

use super::types::DataQualityScore;
use crate::statement::{CostBreakdown, ExpenseBreakdown, IncomeStatement, RevenueBreakdown};
use crate::validation::{Severity, ValidationResult};

const fn ratio_const(hundredths: u32) -> Decimal {
    Decimal::from_parts(hundredths, 0, 0, false, 2)
}

/// Relative tolerance for the revenue and gross profit recomputation checks.
pub const CONSISTENCY_TOLERANCE: Decimal = ratio_const(2);
/// Absolute tolerance for the gross margin recomputation check.
pub const MARGIN_TOLERANCE: Decimal = ratio_const(1);

const MISSING_BREAKDOWN_PENALTY: Decimal = ratio_const(20);
const REVENUE_MIX_PENALTY: Decimal = ratio_const(10);
const FOOD_SHARE_MIN: Decimal = ratio_const(50);
const FOOD_SHARE_MAX: Decimal = ratio_const(95);
const SUSPICIOUS_MARGIN: Decimal = ratio_const(90);
const SUSPICIOUS_COST_RATIO: Decimal = ratio_const(10);

/// Scores a validated statement.
#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    config: ScoringConfig,
}

impl QualityScorer {
    /// Creates a scorer.
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scores `statement` given the issues found for it.
    #[must_use]
    pub fn score(&self, statement: &IncomeStatement, validation: &ValidationResult) -> DataQualityScore {
        let completeness = self.completeness(statement);
        let accuracy = accuracy(validation);
        let consistency = self.consistency(statement);

        let weights = &self.config.weights;
        // Saturates so unvalidated weights cannot overflow.
        let overall = clamp_unit(
            weights
                .completeness
                .saturating_mul(completeness)
                .saturating_add(weights.accuracy.saturating_mul(accuracy))
                .saturating_add(weights.consistency.saturating_mul(consistency)),
        );

        DataQualityScore {
            overall,
            completeness,
            accuracy,
            consistency,
            revenue_quality: revenue_quality(&statement.revenue),
            cost_quality: cost_quality(&statement.costs),
            expense_quality: expense_quality(&statement.expenses),
            missing_fields: missing_fields(statement),
            suspicious_values: suspicious_values(statement),
            calculation_errors: validation
                .issues
                .iter()
                .filter(|i| i.message.to_lowercase().contains("calculation"))
                .map(|i| i.message.clone())
                .collect(),
        }
    }

    /// Satisfied checklist items over the configured denominator, capped at 1.
    fn completeness(&self, statement: &IncomeStatement) -> Decimal {
        let revenue = &statement.revenue;
        let costs = &statement.costs;
        let expenses = &statement.expenses;

        let checklist = [
            revenue.total_revenue > Decimal::ZERO,
            revenue.food_revenue > Decimal::ZERO,
            revenue.beverage_revenue >= Decimal::ZERO,
            costs.total_cogs >= Decimal::ZERO,
            costs.food_cost >= Decimal::ZERO,
            expenses.total_operating_expenses >= Decimal::ZERO,
            expenses.labor_cost >= Decimal::ZERO,
            expenses.rent_expense >= Decimal::ZERO,
            // Gross profit is always computed.
            true,
            statement.metrics.gross_margin.is_some(),
        ];
        let filled = checklist.iter().filter(|found| **found).count();

        share(filled, self.config.completeness_denominator).min(Decimal::ONE)
    }

    fn consistency(&self, statement: &IncomeStatement) -> Decimal {
        let revenue = &statement.revenue;
        let total = revenue.total_revenue;
        let tolerance = total
            .checked_mul(CONSISTENCY_TOLERANCE)
            .map(|t| t.abs());

        let mut checks = 0usize;
        let mut passed = 0usize;

        checks += 1;
        let components_match = revenue
            .component_sum()
            .zip(tolerance)
            .and_then(|(sum, tol)| total.checked_sub(sum).map(|d| d.abs() <= tol));
        if components_match == Some(true) {
            passed += 1;
        }

        checks += 1;
        let gross_profit_matches = total
            .checked_sub(statement.costs.total_cogs)
            .and_then(|gp| gp.checked_sub(statement.metrics.gross_profit))
            .zip(tolerance)
            .map(|(diff, tol)| diff.abs() <= tol);
        if gross_profit_matches == Some(true) {
            passed += 1;
        }

        if total > Decimal::ZERO {
            checks += 1;
            let margin_matches = statement
                .metrics
                .gross_profit
                .checked_div(total)
                .zip(statement.metrics.gross_margin)
                .and_then(|(recomputed, stated)| recomputed.checked_sub(stated))
                .is_some_and(|diff| diff.abs() <= MARGIN_TOLERANCE);
            if margin_matches {
                passed += 1;
            }
        } else if self.config.zero_revenue_consistency == ZeroRevenueConsistency::Penalize {
            checks += 1;
        }

        share(passed, checks)
    }
}

/// `1 - Σweight / (n · max weight)`, or 1 with no issues.
fn accuracy(validation: &ValidationResult) -> Decimal {
    if validation.issues.is_empty() {
        return Decimal::ONE;
    }

    let penalty: Decimal = validation.issues.iter().map(|i| i.severity.weight()).sum();
    let max_penalty = Decimal::from(validation.issues.len()) * Severity::MAX_WEIGHT;

    penalty
        .checked_div(max_penalty)
        .map_or(Decimal::ONE, |normalized| clamp_unit(Decimal::ONE - normalized))
}

fn revenue_quality(revenue: &RevenueBreakdown) -> Decimal {
    let mut score = Decimal::ONE;
    let total = revenue.total_revenue;

    if revenue.food_revenue.is_zero() && total > Decimal::ZERO {
        score -= MISSING_BREAKDOWN_PENALTY;
    }

    if total > Decimal::ZERO
        && let Some(food_share) = revenue.food_revenue.checked_div(total)
        && !(FOOD_SHARE_MIN..=FOOD_SHARE_MAX).contains(&food_share)
    {
        score -= REVENUE_MIX_PENALTY;
    }

    clamp_unit(score)
}

fn cost_quality(costs: &CostBreakdown) -> Decimal {
    if costs.food_cost.is_zero() && costs.total_cogs > Decimal::ZERO {
        Decimal::ONE - MISSING_BREAKDOWN_PENALTY
    } else {
        Decimal::ONE
    }
}

fn expense_quality(expenses: &ExpenseBreakdown) -> Decimal {
    if expenses.labor_cost.is_zero() && expenses.total_operating_expenses > Decimal::ZERO {
        Decimal::ONE - MISSING_BREAKDOWN_PENALTY
    } else {
        Decimal::ONE
    }
}

fn missing_fields(statement: &IncomeStatement) -> Vec<String> {
    [
        ("food_revenue", statement.revenue.food_revenue),
        ("food_cost", statement.costs.food_cost),
        ("labor_cost", statement.expenses.labor_cost),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_zero())
    .map(|(name, _)| name.to_string())
    .collect()
}

fn suspicious_values(statement: &IncomeStatement) -> Vec<String> {
    let mut suspicious = Vec::new();

    if let Some(margin) = statement.metrics.gross_margin
        && margin > SUSPICIOUS_MARGIN
    {
        suspicious.push(format!("Very high gross margin: {}", format_percent(margin)));
    }

    let total = statement.revenue.total_revenue;
    if total > Decimal::ZERO
        && let Some(cost_ratio) = statement.costs.total_cogs.checked_div(total)
        && cost_ratio < SUSPICIOUS_COST_RATIO
    {
        suspicious.push(format!("Very low cost ratio: {}", format_percent(cost_ratio)));
    }

    suspicious
}

/// `part / whole` as a decimal; 1 when `whole` is zero.
fn share(part: usize, whole: impl Into<Decimal>) -> Decimal {
    Decimal::from(part)
        .checked_div(whole.into())
        .unwrap_or(Decimal::ONE)
}

fn clamp_unit(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}
