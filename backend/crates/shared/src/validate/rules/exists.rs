//! Rules over the presence of map properties

use serde_json::{Value, json};

use crate::validate::object_reader::ObjectReader;
use crate::validate::rule::ValidationRule;
use crate::validate::schema::display_name;
use crate::validate::validation_result::{ValidationResult, ValidationResultType};

fn count_present(value: &Value, properties: &[String]) -> usize {
    properties
        .iter()
        .filter(|name| ObjectReader::has_property(value, name))
        .count()
}

fn none_present(path: &str, properties: &[String]) -> ValidationResult {
    ValidationResult::new(
        path,
        ValidationResultType::Error,
        "VALUE_NULL",
        format!(
            "{} must have at least one property from {}",
            display_name(path),
            properties.join(",")
        ),
        Some(json!(properties)),
        None,
    )
}

/// At least one of the listed properties must be set
#[derive(Debug, Clone)]
pub struct AtLeastOneExistsRule {
    properties: Vec<String>,
}

impl AtLeastOneExistsRule {
    pub fn new<S: Into<String>>(properties: impl IntoIterator<Item = S>) -> Self {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }
}

impl ValidationRule for AtLeastOneExistsRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        if count_present(value, &self.properties) == 0 {
            results.push(none_present(path, &self.properties));
        }
    }
}

/// Exactly one of the listed properties must be set
#[derive(Debug, Clone)]
pub struct OnlyOneExistsRule {
    properties: Vec<String>,
}

impl OnlyOneExistsRule {
    pub fn new<S: Into<String>>(properties: impl IntoIterator<Item = S>) -> Self {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }
}

impl ValidationRule for OnlyOneExistsRule {
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        match count_present(value, &self.properties) {
            0 => results.push(none_present(path, &self.properties)),
            1 => {}
            _ => results.push(ValidationResult::new(
                path,
                ValidationResultType::Error,
                "VALUE_ONLY_ONE",
                format!(
                    "{} must have only one property from {}",
                    display_name(path),
                    self.properties.join(",")
                ),
                Some(json!(self.properties)),
                None,
            )),
        }
    }
}
