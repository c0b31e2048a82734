//! End-to-end orchestration: reconcile, calculate, validate, score.

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::Pipeline;
pub use types::PipelineResult;
