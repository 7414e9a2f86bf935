//! Rule combinators

use std::sync::Arc;

use serde_json::Value;

use crate::validate::rule::ValidationRule;
use crate::validate::schema::display_name;
use crate::validate::validation_result::{ValidationResult, ValidationResultType};

/// Every rule must pass; all findings are reported
#[derive(Debug, Clone, Default)]
pub struct AndRule {
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl AndRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }
}

impl ValidationRule for AndRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        for rule in &self.rules {
            rule.validate(path, value, results);
        }
    }
}

/// At least one rule must pass; otherwise all findings are reported
#[derive(Debug, Clone, Default)]
pub struct OrRule {
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl OrRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }
}

impl ValidationRule for OrRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        if self.rules.is_empty() {
            return;
        }
        let mut local = Vec::new();
        for rule in &self.rules {
            let before = local.len();
            rule.validate(path, value, &mut local);
            if local.len() == before {
                return;
            }
        }
        results.extend(local);
    }
}

/// Inverts a rule
#[derive(Debug, Clone)]
pub struct NotRule {
    rule: Arc<dyn ValidationRule>,
}

impl NotRule {
    pub fn new(rule: impl ValidationRule + 'static) -> Self {
        Self { rule: Arc::new(rule) }
    }
}

impl ValidationRule for NotRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        let mut local = Vec::new();
        self.rule.validate(path, value, &mut local);
        if local.is_empty() {
            results.push(ValidationResult::new(
                path,
                ValidationResultType::Error,
                "NOT_FAILED",
                format!("Negative check for {} failed", display_name(path)),
                None,
                None,
            ));
        }
    }
}
