//! Rule registry and execution.

use tracing::{debug, error};

use super::rules::{ValidationRule, default_rules};
use super::types::{Severity, ValidationIssue, ValidationResult};
use crate::statement::IncomeStatement;

/// Field reported on issues synthesized from a failing rule.
pub const ENGINE_FIELD: &str = "validation_engine";

/// Runs an ordered set of rules against a statement.
pub struct RuleEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_codes())
            .finish()
    }
}

impl RuleEngine {
    /// Engine with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Engine with the built-in restaurant rules.
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Appends a rule; it runs after the existing ones.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        debug!(code = rule.code(), "Registering validation rule");
        self.rules.push(rule);
    }

    /// Removes every rule with this code. Returns whether anything was removed.
    pub fn remove_rule(&mut self, code: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|rule| rule.code() != code);
        self.rules.len() != before
    }

    /// Codes of the registered rules, in execution order.
    #[must_use]
    pub fn rule_codes(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.code()).collect()
    }

    /// Runs every rule in order and concatenates their issues.
    ///
    /// A rule that fails contributes one `<CODE>_EXECUTION_ERROR` issue in
    /// place of its findings; the remaining rules still run.
    #[must_use]
    pub fn validate(&self, statement: &IncomeStatement) -> ValidationResult {
        let mut issues = Vec::new();

        for rule in &self.rules {
            match rule.check(statement) {
                Ok(found) => issues.extend(found),
                Err(e) => {
                    error!(rule = rule.code(), error = %e, "Validation rule failed");
                    issues.push(
                        ValidationIssue::new(
                            Severity::Error,
                            format!("{}_EXECUTION_ERROR", rule.code()),
                            format!("Validation rule failed to execute: {e}"),
                        )
                        .with_field(ENGINE_FIELD),
                    );
                }
            }
        }

        ValidationResult::new(issues)
    }
}
