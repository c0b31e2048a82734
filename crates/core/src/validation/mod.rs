//! Restaurant business-rule validation.
//!
//! - Issue and result types with severity weights
//! - Built-in rules for margins, cost ratios and revenue consistency
//! - A rule engine that isolates failing rules

pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::RuleEngine;
pub use error::RuleError;
pub use rules::{
    BusinessLogicRule, FnRule, FoodCostRatioRule, LaborCostRatioRule, MarginRule, PrimeCostRule,
    RevenueConsistencyRule, ValidationRule, default_rules,
};
pub use types::{Severity, ValidationIssue, ValidationResult};
