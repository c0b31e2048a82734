//! Property-based tests for quality scoring.

use menuledger_shared::config::{ScoringConfig, ZeroRevenueConsistency};
use menuledger_shared::types::FinancialPeriod;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::scorer::QualityScorer;
use crate::metrics::MetricsCalculator;
use crate::statement::{
    CostBreakdown, ExpenseBreakdown, IncomeStatement, ProfitMetrics, RevenueBreakdown,
};
use crate::validation::{RuleEngine, Severity, ValidationIssue, ValidationResult};

fn amount() -> impl Strategy<Value = Decimal> {
    (-5_000_000i64..200_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn statement_strategy() -> impl Strategy<Value = IncomeStatement> {
    (
        (amount(), amount(), amount(), amount()),
        (amount(), amount()),
        (amount(), amount()),
    )
        .prop_map(|((total, food, beverage, discounts), (cogs, food_cost), (opex, labor))| {
            let revenue = RevenueBreakdown {
                total_revenue: total,
                food_revenue: food,
                beverage_revenue: beverage,
                discounts,
                ..RevenueBreakdown::default()
            };
            let costs = CostBreakdown {
                total_cogs: cogs,
                food_cost,
                ..CostBreakdown::default()
            };
            let expenses = ExpenseBreakdown {
                total_operating_expenses: opex,
                labor_cost: labor,
                ..ExpenseBreakdown::default()
            };
            let metrics = MetricsCalculator::try_calculate(&revenue, &costs, &expenses)
                .unwrap_or_else(|_| ProfitMetrics::zeroed());
            IncomeStatement::new(FinancialPeriod::unknown(), revenue, costs, expenses, metrics)
        })
}

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
        Just(Severity::Critical),
    ]
}

fn config_strategy() -> impl Strategy<Value = ScoringConfig> {
    (
        1u32..=30,
        prop_oneof![
            Just(ZeroRevenueConsistency::Exclude),
            Just(ZeroRevenueConsistency::Penalize)
        ],
    )
        .prop_map(|(completeness_denominator, zero_revenue_consistency)| ScoringConfig {
            completeness_denominator,
            zero_revenue_consistency,
            ..ScoringConfig::default()
        })
}

fn in_unit(value: Decimal) -> bool {
    (Decimal::ZERO..=Decimal::ONE).contains(&value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every score stays within [0, 1].
    #[test]
    fn prop_scores_are_bounded(
        statement in statement_strategy(),
        severities in prop::collection::vec(severity_strategy(), 0..12),
        config in config_strategy(),
    ) {
        let validation = ValidationResult::new(
            severities
                .into_iter()
                .map(|s| ValidationIssue::new(s, "PROP_001_X", "generated"))
                .collect(),
        );

        let score = QualityScorer::new(config).score(&statement, &validation);

        prop_assert!(in_unit(score.overall));
        prop_assert!(in_unit(score.completeness));
        prop_assert!(in_unit(score.accuracy));
        prop_assert!(in_unit(score.consistency));
        prop_assert!(in_unit(score.revenue_quality));
        prop_assert!(in_unit(score.cost_quality));
        prop_assert!(in_unit(score.expense_quality));
    }

    /// Statements whose metrics come from the calculator always pass the
    /// gross profit and margin recomputation checks when revenue is positive.
    #[test]
    fn prop_calculated_metrics_are_consistent(statement in statement_strategy()) {
        prop_assume!(statement.revenue.total_revenue > Decimal::ZERO);

        let score = QualityScorer::default().score(&statement, &ValidationResult::default());

        prop_assert!(score.consistency >= Decimal::TWO / Decimal::from(3));
    }

    /// Scoring the engine's own output twice gives the same verdict.
    #[test]
    fn prop_scoring_is_deterministic(statement in statement_strategy()) {
        let validation = RuleEngine::default().validate(&statement);
        let scorer = QualityScorer::default();

        prop_assert_eq!(
            scorer.score(&statement, &validation),
            scorer.score(&statement, &validation)
        );
    }
}
