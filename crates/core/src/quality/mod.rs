//! Data quality scoring.
//!
//! Combines completeness, accuracy (from validation issues) and
//! consistency (from recomputation checks) into one verdict, plus
//! per-category scores and advisory findings.

pub mod scorer;
pub mod types;

#[cfg(test)]
mod scorer_props;
#[cfg(test)]
mod tests;

pub use scorer::QualityScorer;
pub use types::DataQualityScore;
