//! Schema for a named property of an object

use serde_json::Value;

use super::schema::{
    SchemaBase, SchemaBuilder, Validate, ValueType, compose_path, perform_type_validation,
};
use super::validation_result::ValidationResult;

/// Named property with an optional declared type
///
/// Property names are matched against map keys ignoring case.
#[derive(Debug, Clone)]
pub struct PropertySchema {
    base: SchemaBase,
    name: String,
    value_type: Option<ValueType>,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>, value_type: impl Into<ValueType>) -> Self {
        Self {
            base: SchemaBase::default(),
            name: name.into(),
            value_type: Some(value_type.into()),
        }
    }

    /// Property without a type check
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            base: SchemaBase::default(),
            name: name.into(),
            value_type: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    pub fn value_type(&self) -> Option<&ValueType> {
        self.value_type.as_ref()
    }

    pub fn set_value_type(&mut self, value_type: Option<ValueType>) {
        self.value_type = value_type;
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.base.is_required()
    }
}

impl SchemaBuilder for PropertySchema {
    fn base_mut(&mut self) -> &mut SchemaBase {
        &mut self.base
    }
}

impl Validate for PropertySchema {
    /// `path` is the path of the owning object; the property name is appended
    fn perform_validation(
        &self,
        path: &str,
        value: Option<&Value>,
        results: &mut Vec<ValidationResult>,
    ) {
        let path = compose_path(path, &self.name);
        self.base.perform_validation(&path, value, results);
        perform_type_validation(&path, self.value_type.as_ref(), value, results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::type_code::TypeCode;
    use serde_json::json;

    #[test]
    fn test_path_includes_property_name() {
        let schema = PropertySchema::new("zip", TypeCode::String).make_required();

        let mut results = Vec::new();
        schema.perform_validation("address", None, &mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path(), "address.zip");
        assert_eq!(results[0].message(), "address.zip must not be null");

        let mut results = Vec::new();
        schema.perform_validation("", Some(&json!(12345)), &mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path(), "zip");
        assert_eq!(results[0].code(), "TYPE_MISMATCH");
    }

    #[test]
    fn test_untyped_accepts_anything() {
        let mut schema = PropertySchema::untyped("any");
        let mut results = Vec::new();
        schema.perform_validation("", Some(&json!([1, 2])), &mut results);
        assert!(results.is_empty());

        schema.set_value_type(Some(TypeCode::Map.into()));
        schema.set_name("other");
        schema.perform_validation("", Some(&json!([1, 2])), &mut results);
        assert_eq!(results[0].path(), "other");
    }
}
