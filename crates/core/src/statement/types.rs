//! Canonical income statement types.

use menuledger_shared::types::{Currency, FinancialPeriod};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Adds amounts, returning `None` on overflow.
pub(crate) fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
}

/// Revenue breakdown by category.
///
/// `total_revenue` should equal the sum of the components within 1%, but
/// upstream data may violate that; the revenue consistency rule reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Total operating revenue.
    pub total_revenue: Decimal,
    /// Food sales.
    pub food_revenue: Decimal,
    /// Beverage sales.
    pub beverage_revenue: Decimal,
    /// Dessert sales.
    pub dessert_revenue: Decimal,
    /// Other revenue (packaging, delivery fees).
    pub other_revenue: Decimal,
    /// Customer discounts, normally negative.
    pub discounts: Decimal,
}

impl RevenueBreakdown {
    /// Sum of food, beverage, dessert, other and discounts.
    ///
    /// Returns `None` if the sum overflows.
    #[must_use]
    pub fn component_sum(&self) -> Option<Decimal> {
        checked_sum([
            self.food_revenue,
            self.beverage_revenue,
            self.dessert_revenue,
            self.other_revenue,
            self.discounts,
        ])
    }
}

/// Cost of goods sold breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total cost of goods sold.
    pub total_cogs: Decimal,
    /// Food ingredient cost.
    pub food_cost: Decimal,
    /// Beverage cost.
    pub beverage_cost: Decimal,
    /// Dessert ingredient cost.
    pub dessert_cost: Decimal,
    /// Other direct cost.
    pub other_cost: Decimal,
}

/// Operating expense breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Total operating expenses.
    pub total_operating_expenses: Decimal,
    /// Total labor cost.
    pub labor_cost: Decimal,
    /// Wages, part of labor cost.
    pub wages: Decimal,
    /// Social insurance and benefits, part of labor cost.
    pub benefits: Decimal,
    /// Total rent.
    pub rent_expense: Decimal,
    /// Storefront rent, part of rent.
    pub storefront_rent: Decimal,
    /// Staff dormitory rent, part of rent.
    pub dormitory_rent: Decimal,
    /// Utilities and property management.
    pub utilities: Decimal,
    /// Marketing and advertising.
    pub marketing: Decimal,
    /// Everything else.
    pub other_expenses: Decimal,
}

/// Profit metrics and restaurant cost ratios.
///
/// Optional metrics are `None` when their denominator is not positive.
/// They are never coerced to zero, which would trip the validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitMetrics {
    /// Revenue minus COGS.
    pub gross_profit: Decimal,
    /// Gross profit / revenue.
    pub gross_margin: Option<Decimal>,
    /// Gross profit minus operating expenses.
    pub operating_profit: Decimal,
    /// Operating profit / revenue.
    pub operating_margin: Option<Decimal>,
    /// Food gross margin.
    pub food_margin: Option<Decimal>,
    /// Beverage gross margin.
    pub beverage_margin: Option<Decimal>,
    /// Dessert gross margin.
    pub dessert_margin: Option<Decimal>,
    /// Food cost / food revenue.
    pub food_cost_ratio: Option<Decimal>,
    /// Labor cost / revenue.
    pub labor_cost_ratio: Option<Decimal>,
    /// (COGS + labor) / revenue.
    pub prime_cost_ratio: Option<Decimal>,
}

impl ProfitMetrics {
    /// The degraded metrics substituted when calculation fails.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            gross_profit: Decimal::ZERO,
            gross_margin: Some(Decimal::ZERO),
            operating_profit: Decimal::ZERO,
            operating_margin: Some(Decimal::ZERO),
            food_margin: None,
            beverage_margin: None,
            dessert_margin: None,
            food_cost_ratio: None,
            labor_cost_ratio: None,
            prime_cost_ratio: None,
        }
    }
}

/// A reconciled restaurant income statement.
///
/// Built once per input by the reconciler and metrics calculator;
/// validation and scoring only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Reporting period.
    pub period: FinancialPeriod,
    /// Revenue breakdown.
    pub revenue: RevenueBreakdown,
    /// COGS breakdown.
    pub costs: CostBreakdown,
    /// Operating expense breakdown.
    pub expenses: ExpenseBreakdown,
    /// Derived metrics.
    pub metrics: ProfitMetrics,
    /// Reporting currency.
    pub currency: Currency,
    /// Restaurant display name.
    pub restaurant_name: Option<String>,
    /// Reference to the raw source (file path, sheet name).
    pub source: Option<String>,
}

impl IncomeStatement {
    /// Creates a statement in the default currency with no metadata.
    #[must_use]
    pub fn new(
        period: FinancialPeriod,
        revenue: RevenueBreakdown,
        costs: CostBreakdown,
        expenses: ExpenseBreakdown,
        metrics: ProfitMetrics,
    ) -> Self {
        Self {
            period,
            revenue,
            costs,
            expenses,
            metrics,
            currency: Currency::default(),
            restaurant_name: None,
            source: None,
        }
    }
}
