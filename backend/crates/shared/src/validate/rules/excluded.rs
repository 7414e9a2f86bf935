//! Exclusion of a fixed set of values

use serde_json::Value;

use super::included::join_values;
use crate::validate::object_comparator::ObjectComparator;
use crate::validate::rule::ValidationRule;
use crate::validate::schema::display_name;
use crate::validate::validation_result::{ValidationResult, ValidationResultType};

/// Value must not equal any of the listed values
#[derive(Debug, Clone)]
pub struct ExcludedRule {
    values: Vec<Value>,
}

impl ExcludedRule {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl ValidationRule for ExcludedRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        if !self.values.iter().any(|v| ObjectComparator::are_equal(v, value)) {
            return;
        }
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "VALUE_INCLUDED",
            format!("{} must not be one of {}", display_name(path), join_values(&self.values)),
            Some(Value::Array(self.values.clone())),
            Some(value.clone()),
        ));
    }
}
