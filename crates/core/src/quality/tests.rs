//! Quality scorer tests.

use menuledger_shared::config::{ScoreWeights, ScoringConfig, ZeroRevenueConsistency};
use menuledger_shared::types::FinancialPeriod;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::scorer::QualityScorer;
use crate::metrics::MetricsCalculator;
use crate::statement::{CostBreakdown, ExpenseBreakdown, IncomeStatement, RevenueBreakdown};
use crate::validation::{RuleEngine, Severity, ValidationIssue, ValidationResult};

fn build(
    revenue: RevenueBreakdown,
    costs: CostBreakdown,
    expenses: ExpenseBreakdown,
) -> IncomeStatement {
    let metrics = MetricsCalculator::try_calculate(&revenue, &costs, &expenses).unwrap();
    IncomeStatement::new(FinancialPeriod::unknown(), revenue, costs, expenses, metrics)
}

fn healthy() -> IncomeStatement {
    build(
        RevenueBreakdown {
            total_revenue: dec!(120000),
            food_revenue: dec!(95000),
            beverage_revenue: dec!(20000),
            dessert_revenue: dec!(5000),
            ..RevenueBreakdown::default()
        },
        CostBreakdown {
            total_cogs: dec!(42000),
            food_cost: dec!(28500),
            beverage_cost: dec!(5000),
            ..CostBreakdown::default()
        },
        ExpenseBreakdown {
            total_operating_expenses: dec!(50000),
            labor_cost: dec!(30000),
            ..ExpenseBreakdown::default()
        },
    )
}

fn empty_statement() -> IncomeStatement {
    build(
        RevenueBreakdown::default(),
        CostBreakdown::default(),
        ExpenseBreakdown::default(),
    )
}

fn issues(severities: &[Severity]) -> ValidationResult {
    ValidationResult::new(
        severities
            .iter()
            .map(|s| ValidationIssue::new(*s, "TEST_001_X", "finding"))
            .collect(),
    )
}

#[test]
fn test_healthy_statement_scores_perfectly() {
    let statement = healthy();
    let validation = RuleEngine::default().validate(&statement);

    let score = QualityScorer::default().score(&statement, &validation);

    assert_eq!(score.completeness, Decimal::ONE);
    assert_eq!(score.accuracy, Decimal::ONE);
    assert_eq!(score.consistency, Decimal::ONE);
    assert_eq!(score.overall, Decimal::ONE);
    assert_eq!(score.revenue_quality, Decimal::ONE);
    assert_eq!(score.cost_quality, Decimal::ONE);
    assert_eq!(score.expense_quality, Decimal::ONE);
    assert!(score.missing_fields.is_empty());
    assert!(score.suspicious_values.is_empty());
    assert!(score.calculation_errors.is_empty());
    assert_eq!(score.overall_percent(), "100.0%");
}

#[rstest]
#[case(&[], dec!(1))]
#[case(&[Severity::Info, Severity::Info], dec!(1))]
#[case(&[Severity::Warning, Severity::Error], dec!(0.6))]
#[case(&[Severity::Critical], dec!(0))]
#[case(&[Severity::Error, Severity::Error, Severity::Error, Severity::Error], dec!(0.4))]
fn test_accuracy_from_issue_weights(#[case] severities: &[Severity], #[case] expected: Decimal) {
    let score = QualityScorer::default().score(&healthy(), &issues(severities));

    assert_eq!(score.accuracy, expected);
}

#[test]
fn test_overall_is_weighted_sum() {
    let score = QualityScorer::default().score(&healthy(), &issues(&[Severity::Warning, Severity::Error]));

    // 0.3 * 1 + 0.4 * 0.6 + 0.3 * 1
    assert_eq!(score.overall, dec!(0.84));
}

#[rstest]
#[case(Decimal::MAX, dec!(1))]
#[case(Decimal::MIN, dec!(0))]
fn test_extreme_weights_saturate(#[case] weight: Decimal, #[case] expected: Decimal) {
    let scorer = QualityScorer::new(ScoringConfig {
        weights: ScoreWeights {
            completeness: weight,
            accuracy: weight,
            consistency: weight,
        },
        ..ScoringConfig::default()
    });

    let score = scorer.score(&healthy(), &ValidationResult::default());

    assert_eq!(score.overall, expected);
}

#[rstest]
#[case(10, dec!(0.7))]
#[case(20, dec!(0.35))]
#[case(5, dec!(1))]
fn test_completeness_denominator(#[case] denominator: u32, #[case] expected: Decimal) {
    let scorer = QualityScorer::new(ScoringConfig {
        completeness_denominator: denominator,
        ..ScoringConfig::default()
    });

    let score = scorer.score(&empty_statement(), &ValidationResult::default());

    assert_eq!(score.completeness, expected);
}

#[rstest]
#[case(ZeroRevenueConsistency::Exclude, dec!(1))]
#[case(ZeroRevenueConsistency::Penalize, Decimal::TWO / Decimal::from(3))]
fn test_zero_revenue_consistency_policy(
    #[case] policy: ZeroRevenueConsistency,
    #[case] expected: Decimal,
) {
    let scorer = QualityScorer::new(ScoringConfig {
        zero_revenue_consistency: policy,
        ..ScoringConfig::default()
    });

    let score = scorer.score(&empty_statement(), &ValidationResult::default());

    assert_eq!(score.consistency, expected);
}

#[test]
fn test_component_mismatch_fails_one_consistency_check() {
    let statement = build(
        RevenueBreakdown {
            total_revenue: dec!(100000),
            food_revenue: dec!(70000),
            beverage_revenue: dec!(20000),
            ..RevenueBreakdown::default()
        },
        CostBreakdown {
            total_cogs: dec!(35000),
            food_cost: dec!(25000),
            ..CostBreakdown::default()
        },
        ExpenseBreakdown::default(),
    );

    let score = QualityScorer::default().score(&statement, &ValidationResult::default());

    assert_eq!(score.consistency, Decimal::TWO / Decimal::from(3));
}

#[test]
fn test_stale_metrics_fail_recomputation_checks() {
    let mut statement = healthy();
    statement.metrics.gross_profit = dec!(60000);
    statement.metrics.gross_margin = Some(dec!(0.65));

    let score = QualityScorer::default().score(&statement, &ValidationResult::default());

    // Revenue components still match; gross profit and margin do not.
    assert_eq!(score.consistency, Decimal::ONE / Decimal::from(3));
}

#[test]
fn test_category_penalties() {
    let statement = build(
        RevenueBreakdown {
            total_revenue: dec!(100000),
            other_revenue: dec!(100000),
            ..RevenueBreakdown::default()
        },
        CostBreakdown {
            total_cogs: dec!(30000),
            other_cost: dec!(30000),
            ..CostBreakdown::default()
        },
        ExpenseBreakdown {
            total_operating_expenses: dec!(20000),
            utilities: dec!(20000),
            ..ExpenseBreakdown::default()
        },
    );

    let score = QualityScorer::default().score(&statement, &ValidationResult::default());

    assert_eq!(score.revenue_quality, dec!(0.7));
    assert_eq!(score.cost_quality, dec!(0.8));
    assert_eq!(score.expense_quality, dec!(0.8));
    assert_eq!(score.missing_fields, ["food_revenue", "food_cost", "labor_cost"]);
}

#[rstest]
#[case(dec!(40000), dec!(0.9))]
#[case(dec!(50000), dec!(1))]
#[case(dec!(95000), dec!(1))]
#[case(dec!(96000), dec!(0.9))]
fn test_revenue_mix_penalty(#[case] food_revenue: Decimal, #[case] expected: Decimal) {
    let mut statement = healthy();
    statement.revenue.total_revenue = dec!(100000);
    statement.revenue.food_revenue = food_revenue;

    let score = QualityScorer::default().score(&statement, &ValidationResult::default());

    assert_eq!(score.revenue_quality, expected);
}

#[test]
fn test_suspicious_values() {
    let statement = build(
        RevenueBreakdown {
            total_revenue: dec!(100000),
            food_revenue: dec!(100000),
            ..RevenueBreakdown::default()
        },
        CostBreakdown {
            total_cogs: dec!(5000),
            food_cost: dec!(5000),
            ..CostBreakdown::default()
        },
        ExpenseBreakdown::default(),
    );

    let score = QualityScorer::default().score(&statement, &ValidationResult::default());

    assert_eq!(
        score.suspicious_values,
        ["Very high gross margin: 95.0%", "Very low cost ratio: 5.0%"]
    );
}

#[test]
fn test_calculation_errors_are_collected() {
    let validation = ValidationResult::new(vec![
        ValidationIssue::new(Severity::Error, "A_001_X", "Calculation of margin failed"),
        ValidationIssue::new(Severity::Warning, "B_001_Y", "Something else"),
        ValidationIssue::new(Severity::Warning, "C_001_Z", "Bad CALCULATION input"),
    ]);

    let score = QualityScorer::default().score(&healthy(), &validation);

    assert_eq!(
        score.calculation_errors,
        ["Calculation of margin failed", "Bad CALCULATION input"]
    );
}

#[test]
fn test_scoring_is_deterministic() {
    let statement = healthy();
    let validation = issues(&[Severity::Warning]);
    let scorer = QualityScorer::default();

    assert_eq!(
        scorer.score(&statement, &validation),
        scorer.score(&statement, &validation)
    );
}
