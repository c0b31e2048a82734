//! Field reconciliation.
//!
//! Maps the parser's labeled entries onto canonical statement fields:
//! - First numeric value per entry, skipping percentage columns
//! - Component-sum fallbacks for missing totals
//! - Conversion and fallback diagnostics

pub mod error;
pub mod fields;
pub mod input;
pub mod service;


pub use error::ReconcileError;
pub use fields::{FieldGroup, StatementField};
pub use input::{CellValue, ParseOutcome, PeriodValue, RawEntry, RawStatement};
pub use service::{ReconciledStatement, Reconciler};
