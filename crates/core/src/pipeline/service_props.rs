//! Property-based tests for the pipeline.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::Pipeline;
use crate::reconcile::{ParseOutcome, PeriodValue, RawEntry, RawStatement};

/// Positive amounts from 0.01 to 5,000,000.00.
fn positive_cents() -> impl Strategy<Value = i64> {
    1i64..500_000_000i64
}

fn text_entry(term: &str, cents: i64) -> RawEntry {
    RawEntry::new(
        term,
        vec![PeriodValue::text("1月", &Decimal::new(cents, 2).to_string())],
    )
}

fn statement_strategy() -> impl Strategy<Value = RawStatement> {
    (
        positive_cents(),
        positive_cents(),
        0i64..400_000_000,
        0i64..400_000_000,
        0i64..300_000_000,
    )
        .prop_map(|(food, beverage, cogs, labor, rent)| RawStatement {
            entries: vec![
                text_entry("food_revenue", food),
                text_entry("beverage_revenue", beverage),
                text_entry("total_cogs", cogs),
                text_entry("labor_cost", labor),
                text_entry("rent_expense", rent),
            ],
            periods: vec!["1月".to_string()],
            ..RawStatement::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Gross margin is exactly (revenue - COGS) / revenue.
    #[test]
    fn prop_gross_margin_is_exact(raw in statement_strategy()) {
        let result = Pipeline::default().process(&raw);
        let statement = result.statement.unwrap();

        let revenue = statement.revenue.total_revenue;
        let cogs = statement.costs.total_cogs;
        prop_assert!(revenue > Decimal::ZERO);
        prop_assert_eq!(statement.metrics.gross_profit, revenue - cogs);
        prop_assert_eq!(statement.metrics.gross_margin, Some((revenue - cogs) / revenue));
    }

    /// Processing the same input twice yields identical results.
    #[test]
    fn prop_processing_is_idempotent(raw in statement_strategy()) {
        let pipeline = Pipeline::default();
        prop_assert_eq!(pipeline.process(&raw), pipeline.process(&raw));
    }

    /// Parallel batch processing matches one-at-a-time processing.
    #[test]
    fn prop_batch_matches_sequential(raws in prop::collection::vec(statement_strategy(), 0..8)) {
        let pipeline = Pipeline::default();
        let outcomes: Vec<ParseOutcome> = raws.into_iter().map(ParseOutcome::Parsed).collect();

        let sequential: Vec<_> = outcomes.iter().map(|o| pipeline.process_outcome(o)).collect();

        prop_assert_eq!(pipeline.process_batch(&outcomes), sequential);
    }
}
