//! Membership rules over a fixed set of values

use serde_json::Value;

use crate::convert::string_converter::StringConverter;
use crate::validate::object_comparator::ObjectComparator;
use crate::validate::rule::ValidationRule;
use crate::validate::schema::display_name;
use crate::validate::validation_result::{ValidationResult, ValidationResultType};

pub(crate) fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(StringConverter::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Value must equal one of the listed values
#[derive(Debug, Clone)]
pub struct IncludedRule {
    values: Vec<Value>,
}

impl IncludedRule {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl ValidationRule for IncludedRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        if self.values.iter().any(|v| ObjectComparator::are_equal(v, value)) {
            return;
        }
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "VALUE_NOT_INCLUDED",
            format!("{} must be one of {}", display_name(path), join_values(&self.values)),
            Some(Value::Array(self.values.clone())),
            Some(value.clone()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_included() {
        let rule = IncludedRule::new([json!("A"), json!(1)]);
        let mut results = Vec::new();
        rule.validate("kind", &json!("A"), &mut results);
        rule.validate("kind", &json!("1"), &mut results);
        assert!(results.is_empty());

        rule.validate("kind", &json!("B"), &mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_NOT_INCLUDED");
        assert_eq!(results[0].message(), "kind must be one of A,1");
    }
}
