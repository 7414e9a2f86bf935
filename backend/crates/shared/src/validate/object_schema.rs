//! Schema for maps with named properties

use std::collections::HashSet;

use serde_json::{Value, json};

use super::object_reader::ObjectReader;
use super::property_schema::PropertySchema;
use super::schema::{
    SchemaBase, SchemaBuilder, Validate, ValueType, compose_path, display_name, present,
};
use super::validation_result::{ValidationResult, ValidationResultType};
use crate::convert::type_code::TypeCode;
use crate::convert::type_converter::TypeConverter;

/// Map schema with declared properties
///
/// Keys are matched to properties ignoring case. Keys with no declared
/// property produce an `UNEXPECTED_PROPERTY` warning unless undefined
/// properties are allowed.
///
/// ## Examples
///
/// ```
/// use commons::convert::type_code::TypeCode;
/// use commons::validate::object_schema::ObjectSchema;
/// use commons::validate::schema::Validate;
/// use serde_json::json;
///
/// let schema = ObjectSchema::new()
///     .with_required_property("id", TypeCode::String)
///     .with_optional_property("name", TypeCode::String);
///
/// assert!(schema.validate(&json!({ "id": "1" })).is_empty());
/// assert_eq!(schema.validate(&json!({})).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    base: SchemaBase,
    properties: Vec<PropertySchema>,
    allow_undefined: bool,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_undefined(mut self, allow: bool) -> Self {
        self.allow_undefined = allow;
        self
    }

    pub fn with_property(mut self, property: PropertySchema) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_required_property(self, name: &str, value_type: impl Into<ValueType>) -> Self {
        self.with_property(PropertySchema::new(name, value_type).make_required())
    }

    pub fn with_optional_property(self, name: &str, value_type: impl Into<ValueType>) -> Self {
        self.with_property(PropertySchema::new(name, value_type))
    }

    #[inline]
    pub fn properties(&self) -> &[PropertySchema] {
        &self.properties
    }

    #[inline]
    pub fn is_undefined_allowed(&self) -> bool {
        self.allow_undefined
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.base.is_required()
    }
}

impl SchemaBuilder for ObjectSchema {
    fn base_mut(&mut self) -> &mut SchemaBase {
        &mut self.base
    }
}

impl Validate for ObjectSchema {
    fn perform_validation(
        &self,
        path: &str,
        value: Option<&Value>,
        results: &mut Vec<ValidationResult>,
    ) {
        self.base.perform_validation(path, value, results);
        let Some(value) = present(value) else {
            return;
        };
        let Some(map) = value.as_object() else {
            let actual = TypeConverter::to_type_code(value);
            results.push(ValidationResult::new(
                path,
                ValidationResultType::Error,
                "TYPE_MISMATCH",
                format!(
                    "{} type must be {} but found {}",
                    display_name(path),
                    TypeCode::Map,
                    actual
                ),
                Some(json!(TypeCode::Map.as_str())),
                Some(json!(actual.as_str())),
            ));
            return;
        };

        let mut consumed: HashSet<&str> = HashSet::new();
        for property in &self.properties {
            let entry = ObjectReader::get_entry(map, property.name(), |key| consumed.contains(key));
            let property_value = entry.map(|(key, value)| {
                consumed.insert(key.as_str());
                value
            });
            property.perform_validation(path, property_value, results);
        }

        if self.allow_undefined {
            return;
        }
        for key in map.keys().filter(|key| !consumed.contains(key.as_str())) {
            results.push(ValidationResult::new(
                compose_path(path, key),
                ValidationResultType::Warning,
                "UNEXPECTED_PROPERTY",
                format!("{} contains unexpected property {}", display_name(path), key),
                None,
                Some(json!(key)),
            ));
        }
    }
}
