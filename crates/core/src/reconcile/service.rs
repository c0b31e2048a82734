//! Field reconciliation: raw labeled entries to canonical breakdowns.

use std::collections::BTreeMap;
use std::str::FromStr;

use menuledger_shared::config::ReconcileConfig;
use menuledger_shared::types::{FinancialPeriod, amount_from_number, parse_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fields::{FieldGroup, StatementField};
use super::input::{CellValue, RawEntry, RawStatement};
use crate::diagnostics::Diagnostics;
use crate::statement::{CostBreakdown, ExpenseBreakdown, RevenueBreakdown, checked_sum};

const REVENUE_COMPONENTS: [StatementField; 5] = [
    StatementField::FoodRevenue,
    StatementField::BeverageRevenue,
    StatementField::DessertRevenue,
    StatementField::OtherRevenue,
    StatementField::Discounts,
];

const COST_COMPONENTS: [StatementField; 4] = [
    StatementField::FoodCost,
    StatementField::BeverageCost,
    StatementField::DessertCost,
    StatementField::OtherCost,
];

const LABOR_COMPONENTS: [StatementField; 2] = [StatementField::Wages, StatementField::Benefits];

const RENT_COMPONENTS: [StatementField; 2] =
    [StatementField::StorefrontRent, StatementField::DormitoryRent];

const EXPENSE_COMPONENTS: [StatementField; 5] = [
    StatementField::LaborCost,
    StatementField::RentExpense,
    StatementField::Utilities,
    StatementField::Marketing,
    StatementField::OtherExpenses,
];

/// Canonical breakdowns produced from one raw statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledStatement {
    /// Main reporting period.
    pub period: FinancialPeriod,
    /// Revenue breakdown.
    pub revenue: RevenueBreakdown,
    /// COGS breakdown.
    pub costs: CostBreakdown,
    /// Operating expense breakdown.
    pub expenses: ExpenseBreakdown,
}

/// Extracted field values, keyed by canonical field.
#[derive(Debug, Default)]
struct FieldValues(BTreeMap<StatementField, Decimal>);

impl FieldValues {
    fn get(&self, field: StatementField) -> Option<Decimal> {
        self.0.get(&field).copied()
    }

    fn amount(&self, field: StatementField) -> Decimal {
        self.get(field).unwrap_or(Decimal::ZERO)
    }

    fn set(&mut self, field: StatementField, value: Decimal) {
        self.0.insert(field, value);
    }

    fn sum_of(&self, fields: &[StatementField]) -> Option<Decimal> {
        checked_sum(fields.iter().map(|f| self.amount(*f)))
    }
}

/// Maps raw entries to canonical fields and repairs missing totals.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    /// Creates a reconciler.
    #[must_use]
    pub const fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    /// Reconciles a raw statement.
    ///
    /// Never fails on malformed business data: unconvertible values,
    /// reconstructed totals and missing revenue are recorded in
    /// `diagnostics` and unset fields default to zero.
    pub fn reconcile(&self, raw: &RawStatement, diagnostics: &mut Diagnostics) -> ReconciledStatement {
        let period = FinancialPeriod::detect(&raw.periods, &self.config);
        let recognized = Self::recognize(&raw.entries);
        let mut values = FieldValues::default();

        for group in FieldGroup::ALL {
            for (field, entry) in recognized.iter().filter(|(f, _)| f.group() == group) {
                if let Some(amount) = self.first_numeric(entry, diagnostics) {
                    values.set(*field, amount);
                }
            }

            match group {
                FieldGroup::Revenue => Self::resolve_revenue_total(&mut values, diagnostics),
                FieldGroup::Cost => Self::fill_from_components(
                    &mut values,
                    StatementField::TotalCogs,
                    &COST_COMPONENTS,
                    "Total COGS",
                    diagnostics,
                ),
                FieldGroup::Expense => {
                    Self::fill_from_components(
                        &mut values,
                        StatementField::LaborCost,
                        &LABOR_COMPONENTS,
                        "Labor cost",
                        diagnostics,
                    );
                    Self::fill_from_components(
                        &mut values,
                        StatementField::RentExpense,
                        &RENT_COMPONENTS,
                        "Rent expense",
                        diagnostics,
                    );
                    Self::fill_from_components(
                        &mut values,
                        StatementField::TotalOperatingExpenses,
                        &EXPENSE_COMPONENTS,
                        "Total operating expenses",
                        diagnostics,
                    );
                }
            }
        }

        ReconciledStatement {
            period,
            revenue: RevenueBreakdown {
                total_revenue: values.amount(StatementField::TotalRevenue),
                food_revenue: values.amount(StatementField::FoodRevenue),
                beverage_revenue: values.amount(StatementField::BeverageRevenue),
                dessert_revenue: values.amount(StatementField::DessertRevenue),
                other_revenue: values.amount(StatementField::OtherRevenue),
                discounts: values.amount(StatementField::Discounts),
            },
            costs: CostBreakdown {
                total_cogs: values.amount(StatementField::TotalCogs),
                food_cost: values.amount(StatementField::FoodCost),
                beverage_cost: values.amount(StatementField::BeverageCost),
                dessert_cost: values.amount(StatementField::DessertCost),
                other_cost: values.amount(StatementField::OtherCost),
            },
            expenses: ExpenseBreakdown {
                total_operating_expenses: values.amount(StatementField::TotalOperatingExpenses),
                labor_cost: values.amount(StatementField::LaborCost),
                wages: values.amount(StatementField::Wages),
                benefits: values.amount(StatementField::Benefits),
                rent_expense: values.amount(StatementField::RentExpense),
                storefront_rent: values.amount(StatementField::StorefrontRent),
                dormitory_rent: values.amount(StatementField::DormitoryRent),
                utilities: values.amount(StatementField::Utilities),
                marketing: values.amount(StatementField::Marketing),
                other_expenses: values.amount(StatementField::OtherExpenses),
            },
        }
    }

    /// Pairs each entry with its canonical field. Unrecognized terms pass
    /// through untouched and take no part in reconciliation.
    fn recognize(entries: &[RawEntry]) -> Vec<(StatementField, &RawEntry)> {
        entries
            .iter()
            .filter_map(|entry| match StatementField::from_str(&entry.term) {
                Ok(field) => Some((field, entry)),
                Err(_) => {
                    debug!(term = %entry.term, label = %entry.source_label, "Skipping unrecognized term");
                    None
                }
            })
            .collect()
    }

    /// First convertible value of an entry outside percentage columns.
    fn first_numeric(&self, entry: &RawEntry, diagnostics: &mut Diagnostics) -> Option<Decimal> {
        for cell in &entry.values {
            if self.config.is_percentage_label(&cell.period) {
                continue;
            }

            let converted = match &cell.value {
                CellValue::Empty => continue,
                CellValue::Text(text) if text.trim().is_empty() => continue,
                CellValue::Number(number) => amount_from_number(*number),
                CellValue::Text(text) => parse_amount(text),
            };

            match converted {
                Ok(amount) => return Some(amount),
                Err(e) => diagnostics.warn(format!(
                    "Could not convert {} value {} for period {}: {e}",
                    entry.source_label, cell.value, cell.period
                )),
            }
        }
        None
    }

    /// Rebuilds total revenue when it is missing or not positive.
    fn resolve_revenue_total(values: &mut FieldValues, diagnostics: &mut Diagnostics) {
        let total = values.get(StatementField::TotalRevenue);
        if total.is_some_and(|t| t > Decimal::ZERO) {
            return;
        }

        match values.sum_of(&REVENUE_COMPONENTS) {
            Some(sum) if sum > Decimal::ZERO => {
                values.set(StatementField::TotalRevenue, sum);
                diagnostics.warn("Total revenue calculated from components");
            }
            Some(_) => {
                values.set(StatementField::TotalRevenue, Decimal::ZERO);
                diagnostics.error("No valid revenue data found");
            }
            None => {
                values.set(StatementField::TotalRevenue, Decimal::ZERO);
                diagnostics.error("Revenue component sum overflowed; no valid revenue data found");
            }
        }
    }

    /// Sets an absent `target` to the sum of `components` when that sum is
    /// positive.
    fn fill_from_components(
        values: &mut FieldValues,
        target: StatementField,
        components: &[StatementField],
        label: &str,
        diagnostics: &mut Diagnostics,
    ) {
        if values.get(target).is_some() {
            return;
        }

        match values.sum_of(components) {
            Some(sum) if sum > Decimal::ZERO => {
                values.set(target, sum);
                diagnostics.warn(format!("{label} calculated from components"));
            }
            Some(_) => {}
            None => diagnostics.warn(format!(
                "{label} left unset: component sum overflowed"
            )),
        }
    }
}
