//! Derives profit metrics from the canonical breakdowns.

use rust_decimal::Decimal;

use super::error::MetricsError;
use crate::diagnostics::Diagnostics;
use crate::statement::{CostBreakdown, ExpenseBreakdown, ProfitMetrics, RevenueBreakdown};

/// Calculator for profit metrics.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Computes metrics, substituting [`ProfitMetrics::zeroed`] and recording
    /// an error when the arithmetic fails.
    ///
    /// The pipeline always gets a statement, even if degraded.
    pub fn calculate(
        revenue: &RevenueBreakdown,
        costs: &CostBreakdown,
        expenses: &ExpenseBreakdown,
        diagnostics: &mut Diagnostics,
    ) -> ProfitMetrics {
        match Self::try_calculate(revenue, costs, expenses) {
            Ok(metrics) => metrics,
            Err(e) => {
                diagnostics.error(format!("Error calculating metrics: {e}"));
                ProfitMetrics::zeroed()
            }
        }
    }

    /// Computes metrics.
    ///
    /// Ratios are `None` when their denominator is not positive.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::Overflow` when an intermediate value exceeds
    /// the decimal range.
    pub fn try_calculate(
        revenue: &RevenueBreakdown,
        costs: &CostBreakdown,
        expenses: &ExpenseBreakdown,
    ) -> Result<ProfitMetrics, MetricsError> {
        let total_revenue = revenue.total_revenue;

        let gross_profit = total_revenue
            .checked_sub(costs.total_cogs)
            .ok_or(MetricsError::Overflow { operation: "gross_profit" })?;
        let operating_profit = gross_profit
            .checked_sub(expenses.total_operating_expenses)
            .ok_or(MetricsError::Overflow { operation: "operating_profit" })?;

        let prime_cost = costs
            .total_cogs
            .checked_add(expenses.labor_cost)
            .ok_or(MetricsError::Overflow { operation: "prime_cost" })?;

        Ok(ProfitMetrics {
            gross_profit,
            gross_margin: ratio(gross_profit, total_revenue, "gross_margin")?,
            operating_profit,
            operating_margin: ratio(operating_profit, total_revenue, "operating_margin")?,
            food_margin: category_margin(revenue.food_revenue, costs.food_cost, "food_margin")?,
            beverage_margin: category_margin(
                revenue.beverage_revenue,
                costs.beverage_cost,
                "beverage_margin",
            )?,
            dessert_margin: category_margin(
                revenue.dessert_revenue,
                costs.dessert_cost,
                "dessert_margin",
            )?,
            food_cost_ratio: ratio(costs.food_cost, revenue.food_revenue, "food_cost_ratio")?,
            labor_cost_ratio: ratio(expenses.labor_cost, total_revenue, "labor_cost_ratio")?,
            prime_cost_ratio: ratio(prime_cost, total_revenue, "prime_cost_ratio")?,
        })
    }
}

/// `numerator / denominator`, undefined unless the denominator is positive.
fn ratio(
    numerator: Decimal,
    denominator: Decimal,
    operation: &'static str,
) -> Result<Option<Decimal>, MetricsError> {
    if denominator <= Decimal::ZERO {
        return Ok(None);
    }
    numerator
        .checked_div(denominator)
        .map(Some)
        .ok_or(MetricsError::Overflow { operation })
}

fn category_margin(
    category_revenue: Decimal,
    category_cost: Decimal,
    operation: &'static str,
) -> Result<Option<Decimal>, MetricsError> {
    if category_revenue <= Decimal::ZERO {
        return Ok(None);
    }
    let profit = category_revenue
        .checked_sub(category_cost)
        .ok_or(MetricsError::Overflow { operation })?;
    ratio(profit, category_revenue, operation)
}
