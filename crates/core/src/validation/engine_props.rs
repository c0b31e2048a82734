//! Property-based tests for the rule engine.

use menuledger_shared::types::FinancialPeriod;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::RuleEngine;
use super::rules::default_rules;
use crate::metrics::MetricsCalculator;
use crate::statement::{
    CostBreakdown, ExpenseBreakdown, IncomeStatement, ProfitMetrics, RevenueBreakdown,
};

/// Amounts from -10,000.00 to 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn statement_strategy() -> impl Strategy<Value = IncomeStatement> {
    (
        (amount(), amount(), amount(), amount()),
        (amount(), amount(), amount()),
        (amount(), amount()),
    )
        .prop_map(
            |((total, food, beverage, discounts), (cogs, food_cost, labor), (opex, rent))| {
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
                    rent_expense: rent,
                    ..ExpenseBreakdown::default()
                };
                let metrics = MetricsCalculator::try_calculate(&revenue, &costs, &expenses)
                    .unwrap_or_else(|_| ProfitMetrics::zeroed());
                IncomeStatement::new(FinancialPeriod::unknown(), revenue, costs, expenses, metrics)
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The engine result is the concatenation of each rule run alone.
    #[test]
    fn prop_rules_are_independent(statement in statement_strategy()) {
        let combined = RuleEngine::default().validate(&statement);

        let mut separately = Vec::new();
        for rule in default_rules() {
            let mut engine = RuleEngine::empty();
            engine.add_rule(rule);
            separately.extend(engine.validate(&statement).issues);
        }

        prop_assert_eq!(combined.issues, separately);
    }

    /// Removing a rule removes exactly the issues carrying its code.
    #[test]
    fn prop_remove_rule_drops_only_its_issues(
        statement in statement_strategy(),
        index in 0usize..6,
    ) {
        let full = RuleEngine::default();
        let code = full.rule_codes()[index].to_string();
        let mut reduced = RuleEngine::default();
        prop_assert!(reduced.remove_rule(&code));

        let expected: Vec<_> = full
            .validate(&statement)
            .issues
            .into_iter()
            .filter(|i| !i.code.starts_with(&code))
            .collect();

        prop_assert_eq!(reduced.validate(&statement).issues, expected);
    }

    /// Validity is exactly the absence of ERROR and CRITICAL issues.
    #[test]
    fn prop_validity_matches_blocking_issues(statement in statement_strategy()) {
        let result = RuleEngine::default().validate(&statement);
        let blocking = result.issues.iter().filter(|i| i.severity.is_blocking()).count();

        prop_assert_eq!(result.is_valid(), blocking == 0);
        prop_assert_eq!(result.error_count(), blocking);
    }

    /// Validation is deterministic.
    #[test]
    fn prop_validation_is_repeatable(statement in statement_strategy()) {
        let engine = RuleEngine::default();
        prop_assert_eq!(engine.validate(&statement), engine.validate(&statement));
    }
}
