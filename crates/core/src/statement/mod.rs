//! Canonical income statement data model.

pub mod types;

pub(crate) use types::checked_sum;
pub use types::{CostBreakdown, ExpenseBreakdown, IncomeStatement, ProfitMetrics, RevenueBreakdown};
