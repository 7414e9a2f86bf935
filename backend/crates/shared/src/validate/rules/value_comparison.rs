//! Comparison against a constant

use serde_json::Value;

use crate::convert::string_converter::StringConverter;
use crate::validate::object_comparator::{CompareOperation, ObjectComparator};
use crate::validate::rule::ValidationRule;
use crate::validate::schema::display_name;
use crate::validate::validation_result::{ValidationResult, ValidationResultType};

/// Compares the value against a constant
#[derive(Debug, Clone)]
pub struct ValueComparisonRule {
    operation: CompareOperation,
    value: Value,
}

impl ValueComparisonRule {
    pub fn new(operation: CompareOperation, value: Value) -> Self {
        Self { operation, value }
    }

    pub fn operation(&self) -> CompareOperation {
        self.operation
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl ValidationRule for ValueComparisonRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        if ObjectComparator::compare(value, self.operation, &self.value) {
            return;
        }
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "BAD_VALUE",
            format!(
                "{} must {} {} but found {}",
                display_name(path),
                self.operation,
                StringConverter::to_string(&self.value),
                StringConverter::to_string(value)
            ),
            Some(self.value.clone()),
            Some(value.clone()),
        ));
    }
}
