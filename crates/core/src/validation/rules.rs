//! Restaurant business rules.
//!
//! Each rule is stateless and independent of the others. Thresholds follow
//! common restaurant benchmarks: gross margin 55-75%, food cost 25-35%,
//! labor 20-30%, prime cost 50-65%.

use menuledger_shared::types::format_percent;
use rust_decimal::Decimal;

use super::error::RuleError;
use super::types::{Severity, ValidationIssue};
use crate::statement::IncomeStatement;

/// `hundredths / 100` as a decimal constant.
const fn pct(hundredths: u32) -> Decimal {
    Decimal::from_parts(hundredths, 0, 0, false, 2)
}

/// Gross margin below this is critically low.
pub const GROSS_MARGIN_CRITICAL: Decimal = pct(45);
/// Gross margin below this is under the industry benchmark.
pub const GROSS_MARGIN_BENCHMARK: Decimal = pct(55);
/// Gross margin above this is implausibly high.
pub const GROSS_MARGIN_CEILING: Decimal = pct(85);

/// Food cost ratio above this is critically high.
pub const FOOD_COST_CRITICAL: Decimal = pct(45);
/// Food cost ratio above this is over the benchmark.
pub const FOOD_COST_BENCHMARK: Decimal = pct(35);
/// Food cost ratio below this is implausibly low.
pub const FOOD_COST_FLOOR: Decimal = pct(15);

/// Labor cost ratio above this is critically high.
pub const LABOR_COST_CRITICAL: Decimal = pct(40);
/// Labor cost ratio above this is over the benchmark.
pub const LABOR_COST_BENCHMARK: Decimal = pct(30);

/// Prime cost ratio above this is critically high.
pub const PRIME_COST_CRITICAL: Decimal = pct(75);
/// Prime cost ratio above this is over the healthy range.
pub const PRIME_COST_BENCHMARK: Decimal = pct(65);

/// Allowed gap between total revenue and its components, as a share of total.
pub const REVENUE_COMPONENT_TOLERANCE: Decimal = pct(1);
/// Discounts beyond this share of revenue are unusually high.
pub const DISCOUNT_LIMIT: Decimal = pct(30);
/// Operating expenses beyond this share of revenue are flagged.
pub const OPERATING_EXPENSE_LIMIT: Decimal = pct(80);

/// Shared contract of every validation rule.
pub trait ValidationRule: Send + Sync {
    /// Rule code, e.g. `MARGIN_001`. Issue codes start with it.
    fn code(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Default severity of the rule.
    fn severity(&self) -> Severity;

    /// Checks a statement.
    ///
    /// # Errors
    ///
    /// Returns `RuleError` when the rule itself cannot run.
    fn check(&self, statement: &IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError>;
}

fn issue(rule: &str, suffix: &str, severity: Severity, message: String) -> ValidationIssue {
    ValidationIssue::new(severity, format!("{rule}_{suffix}"), message)
}

/// Gross margin against restaurant benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginRule;

impl MarginRule {
    /// Rule code.
    pub const CODE: &'static str = "MARGIN_001";
}

impl ValidationRule for MarginRule {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn description(&self) -> &str {
        "Validate gross margins are within restaurant industry ranges"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, statement: &IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> {
        let Some(margin) = statement.metrics.gross_margin else {
            return Ok(Vec::new());
        };
        let shown = format_percent(margin);

        let found = if margin < GROSS_MARGIN_CRITICAL {
            Some(
                issue(
                    Self::CODE,
                    "LOW_GROSS",
                    Severity::Error,
                    format!("Gross margin {shown} is critically low for restaurants"),
                )
                .with_suggestion("Review pricing strategy and cost controls"),
            )
        } else if margin < GROSS_MARGIN_BENCHMARK {
            Some(
                issue(
                    Self::CODE,
                    "BELOW_BENCHMARK",
                    Severity::Warning,
                    format!("Gross margin {shown} is below industry average (55-75%)"),
                )
                .with_suggestion("Consider optimizing menu pricing and ingredient costs"),
            )
        } else if margin > GROSS_MARGIN_CEILING {
            Some(
                issue(
                    Self::CODE,
                    "UNUSUALLY_HIGH",
                    Severity::Warning,
                    format!("Gross margin {shown} is unusually high"),
                )
                .with_suggestion("Verify cost calculations and pricing data"),
            )
        } else {
            None
        };

        Ok(found
            .map(|i| i.with_field("gross_margin").with_value(margin))
            .into_iter()
            .collect())
    }
}

/// Food cost / food revenue against benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoodCostRatioRule;

impl FoodCostRatioRule {
    /// Rule code.
    pub const CODE: &'static str = "COST_001";
}

impl ValidationRule for FoodCostRatioRule {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn description(&self) -> &str {
        "Validate food cost ratios against industry standards"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, statement: &IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> {
        let Some(ratio) = statement.metrics.food_cost_ratio else {
            return Ok(Vec::new());
        };
        let shown = format_percent(ratio);

        let found = if ratio > FOOD_COST_CRITICAL {
            Some(
                issue(
                    Self::CODE,
                    "HIGH_FOOD_COST",
                    Severity::Error,
                    format!("Food cost ratio {shown} is critically high"),
                )
                .with_suggestion("Review portion control, waste management, and supplier costs"),
            )
        } else if ratio > FOOD_COST_BENCHMARK {
            Some(
                issue(
                    Self::CODE,
                    "ABOVE_BENCHMARK",
                    Severity::Warning,
                    format!("Food cost ratio {shown} is above industry average (25-35%)"),
                )
                .with_suggestion("Consider menu engineering and cost optimization"),
            )
        } else if ratio < FOOD_COST_FLOOR {
            Some(
                issue(
                    Self::CODE,
                    "UNUSUALLY_LOW",
                    Severity::Warning,
                    format!("Food cost ratio {shown} is unusually low"),
                )
                .with_suggestion("Verify cost allocation and inventory valuation"),
            )
        } else {
            None
        };

        Ok(found
            .map(|i| i.with_field("food_cost_ratio").with_value(ratio))
            .into_iter()
            .collect())
    }
}

/// Labor cost / revenue against benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaborCostRatioRule;

impl LaborCostRatioRule {
    /// Rule code.
    pub const CODE: &'static str = "LABOR_001";
}

impl ValidationRule for LaborCostRatioRule {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn description(&self) -> &str {
        "Validate labor cost ratios against industry standards"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, statement: &IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> {
        let Some(ratio) = statement.metrics.labor_cost_ratio else {
            return Ok(Vec::new());
        };
        let shown = format_percent(ratio);

        let found = if ratio > LABOR_COST_CRITICAL {
            Some(
                issue(
                    Self::CODE,
                    "HIGH_LABOR_COST",
                    Severity::Error,
                    format!("Labor cost ratio {shown} is critically high"),
                )
                .with_suggestion("Review staffing levels and labor efficiency"),
            )
        } else if ratio > LABOR_COST_BENCHMARK {
            Some(
                issue(
                    Self::CODE,
                    "ABOVE_BENCHMARK",
                    Severity::Warning,
                    format!("Labor cost ratio {shown} is above industry average (20-30%)"),
                )
                .with_suggestion("Consider optimizing schedules and productivity"),
            )
        } else {
            None
        };

        Ok(found
            .map(|i| i.with_field("labor_cost_ratio").with_value(ratio))
            .into_iter()
            .collect())
    }
}

/// (COGS + labor) / revenue against benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeCostRule;

impl PrimeCostRule {
    /// Rule code.
    pub const CODE: &'static str = "PRIME_001";
}

impl ValidationRule for PrimeCostRule {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn description(&self) -> &str {
        "Validate prime cost ratios for operational efficiency"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, statement: &IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> {
        let Some(ratio) = statement.metrics.prime_cost_ratio else {
            return Ok(Vec::new());
        };
        let shown = format_percent(ratio);

        let found = if ratio > PRIME_COST_CRITICAL {
            Some(
                issue(
                    Self::CODE,
                    "HIGH_PRIME_COST",
                    Severity::Error,
                    format!("Prime cost ratio {shown} is critically high"),
                )
                .with_suggestion("Urgent review of both food costs and labor efficiency needed"),
            )
        } else if ratio > PRIME_COST_BENCHMARK {
            Some(
                issue(
                    Self::CODE,
                    "ABOVE_BENCHMARK",
                    Severity::Warning,
                    format!("Prime cost ratio {shown} is above healthy range (50-65%)"),
                )
                .with_suggestion("Focus on optimizing both food costs and labor costs"),
            )
        } else {
            None
        };

        Ok(found
            .map(|i| i.with_field("prime_cost_ratio").with_value(ratio))
            .into_iter()
            .collect())
    }
}

/// Revenue components, signs and discount share.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevenueConsistencyRule;

impl RevenueConsistencyRule {
    /// Rule code.
    pub const CODE: &'static str = "REV_001";
}

impl ValidationRule for RevenueConsistencyRule {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn description(&self) -> &str {
        "Validate revenue components sum correctly"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, statement: &IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> {
        let revenue = &statement.revenue;
        let total = revenue.total_revenue;
        let mut issues = Vec::new();

        let component_sum = revenue.component_sum().ok_or(RuleError::Overflow {
            operation: "revenue component sum",
        })?;
        let tolerance = total
            .checked_mul(REVENUE_COMPONENT_TOLERANCE)
            .ok_or(RuleError::Overflow {
                operation: "revenue tolerance",
            })?
            .abs();
        let difference = total
            .checked_sub(component_sum)
            .ok_or(RuleError::Overflow {
                operation: "revenue difference",
            })?
            .abs();

        if difference > tolerance {
            issues.push(
                issue(
                    Self::CODE,
                    "COMPONENT_MISMATCH",
                    Severity::Error,
                    format!("Revenue components don't sum to total. Difference: {difference}"),
                )
                .with_field("total_revenue")
                .with_value(difference)
                .with_suggestion("Check revenue allocation and ensure all components are captured"),
            );
        }

        if revenue.food_revenue < Decimal::ZERO {
            issues.push(
                issue(
                    Self::CODE,
                    "NEGATIVE_FOOD_REV",
                    Severity::Error,
                    "Food revenue cannot be negative".to_string(),
                )
                .with_field("food_revenue")
                .with_value(revenue.food_revenue),
            );
        }

        if revenue.beverage_revenue < Decimal::ZERO {
            issues.push(
                issue(
                    Self::CODE,
                    "NEGATIVE_BEV_REV",
                    Severity::Error,
                    "Beverage revenue cannot be negative".to_string(),
                )
                .with_field("beverage_revenue")
                .with_value(revenue.beverage_revenue),
            );
        }

        if revenue.discounts < Decimal::ZERO {
            let limit = total.checked_mul(DISCOUNT_LIMIT).ok_or(RuleError::Overflow {
                operation: "discount limit",
            })?;
            let magnitude = revenue.discounts.abs();
            if magnitude > limit {
                // Zero revenue has no discount share.
                let share = magnitude
                    .checked_div(total)
                    .ok_or(RuleError::DivisionByZero {
                        operation: "discount share",
                    })?
                    .abs();
                issues.push(
                    issue(
                        Self::CODE,
                        "HIGH_DISCOUNTS",
                        Severity::Warning,
                        format!("Discounts {} are unusually high", format_percent(share)),
                    )
                    .with_field("discounts")
                    .with_value(revenue.discounts)
                    .with_suggestion("Review discount policies and promotional strategies"),
                );
            }
        }

        Ok(issues)
    }
}

/// Basic constraints any operating business satisfies.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessLogicRule;

impl BusinessLogicRule {
    /// Rule code.
    pub const CODE: &'static str = "LOGIC_001";
}

impl ValidationRule for BusinessLogicRule {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn description(&self) -> &str {
        "Validate basic business logic constraints"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, statement: &IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> {
        let total_revenue = statement.revenue.total_revenue;
        let total_cogs = statement.costs.total_cogs;
        let operating_expenses = statement.expenses.total_operating_expenses;
        let mut issues = Vec::new();

        if total_revenue <= Decimal::ZERO {
            issues.push(
                issue(
                    Self::CODE,
                    "NO_REVENUE",
                    Severity::Error,
                    "Total revenue must be positive for operating business".to_string(),
                )
                .with_field("total_revenue")
                .with_value(total_revenue),
            );
        }

        if total_cogs > total_revenue {
            issues.push(
                issue(
                    Self::CODE,
                    "COGS_EXCEEDS_REVENUE",
                    Severity::Error,
                    "Cost of goods sold cannot exceed revenue".to_string(),
                )
                .with_field("total_cogs")
                .with_value(total_cogs)
                .with_suggestion("Verify cost allocation and inventory calculations"),
            );
        }

        let expense_limit = total_revenue
            .checked_mul(OPERATING_EXPENSE_LIMIT)
            .ok_or(RuleError::Overflow {
                operation: "operating expense limit",
            })?;
        if operating_expenses > expense_limit {
            issues.push(
                issue(
                    Self::CODE,
                    "HIGH_EXPENSES",
                    Severity::Warning,
                    "Operating expenses exceed 80% of revenue".to_string(),
                )
                .with_field("total_operating_expenses")
                .with_value(operating_expenses)
                .with_suggestion("Review expense management and operational efficiency"),
            );
        }

        Ok(issues)
    }
}

/// A rule backed by a closure, for callers extending the engine.
pub struct FnRule<F> {
    code: String,
    description: String,
    severity: Severity,
    check: F,
}

impl<F> FnRule<F>
where
    F: Fn(&IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> + Send + Sync,
{
    /// Creates a closure-backed rule.
    pub fn new(code: &str, description: &str, severity: Severity, check: F) -> Self {
        Self {
            code: code.to_string(),
            description: description.to_string(),
            severity,
            check,
        }
    }
}

impl<F> ValidationRule for FnRule<F>
where
    F: Fn(&IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> + Send + Sync,
{
    fn code(&self) -> &str {
        &self.code
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, statement: &IncomeStatement) -> Result<Vec<ValidationIssue>, RuleError> {
        (self.check)(statement)
    }
}

/// The published rule set, in execution order.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(MarginRule),
        Box::new(FoodCostRatioRule),
        Box::new(LaborCostRatioRule),
        Box::new(PrimeCostRule),
        Box::new(RevenueConsistencyRule),
        Box::new(BusinessLogicRule),
    ]
}
