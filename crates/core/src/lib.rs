//! Core business logic for Menuledger.
//!
//! This crate contains the pure statement pipeline with ZERO file, network
//! or database dependencies. Every amount, ratio and score is a `Decimal`.
//!
//! # Modules
//!
//! - `statement` - Canonical income statement data model
//! - `reconcile` - Raw labeled entries to canonical fields, with fallbacks
//! - `metrics` - Profit metrics and restaurant cost ratios
//! - `validation` - Restaurant business rules and the rule engine
//! - `quality` - Completeness, accuracy and consistency scoring
//! - `pipeline` - End-to-end orchestration and batch processing

pub mod diagnostics;
pub mod metrics;
pub mod pipeline;
pub mod quality;
pub mod reconcile;
pub mod statement;
pub mod validation;

pub use pipeline::{Pipeline, PipelineResult};
