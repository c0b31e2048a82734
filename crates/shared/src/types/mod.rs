//! Common types used across the pipeline.

pub mod money;
pub mod period;

pub use money::{Currency, amount_from_number, format_percent, parse_amount};
pub use period::{FinancialPeriod, PeriodKind};
