//! Shared types, errors, and configuration for Menuledger.
//!
//! This crate provides common types used by the reconciliation pipeline:
//! - Reporting periods and period-kind detection
//! - Currency codes and percentage formatting for decimal ratios
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::PipelineConfig;
pub use error::{AppError, AppResult};
