//! Comparison of two properties of one map

use serde_json::Value;

use crate::validate::object_comparator::{CompareOperation, ObjectComparator};
use crate::validate::object_reader::ObjectReader;
use crate::validate::rule::ValidationRule;
use crate::validate::validation_result::{ValidationResult, ValidationResultType};

/// Compares two properties of the same map
///
/// Missing properties compare as null.
#[derive(Debug, Clone)]
pub struct PropertiesComparisonRule {
    property1: String,
    operation: CompareOperation,
    property2: String,
}

impl PropertiesComparisonRule {
    pub fn new(
        property1: impl Into<String>,
        operation: CompareOperation,
        property2: impl Into<String>,
    ) -> Self {
        Self {
            property1: property1.into(),
            operation,
            property2: property2.into(),
        }
    }
}

impl ValidationRule for PropertiesComparisonRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        let value1 = ObjectReader::get_property(value, &self.property1).unwrap_or(&Value::Null);
        let value2 = ObjectReader::get_property(value, &self.property2).unwrap_or(&Value::Null);
        if ObjectComparator::compare(value1, self.operation, value2) {
            return;
        }
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "PROPERTIES_NOT_MATCH",
            format!(
                "Property {} is expected to {} property {}",
                self.property1, self.operation, self.property2
            ),
            Some(value2.clone()),
            Some(value1.clone()),
        ));
    }
}
