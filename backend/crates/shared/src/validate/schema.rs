//! Schema kinds and the validation pass they share
//!
//! [`Schema`] is a tagged union of the four kinds: primitive, object,
//! property and array. Every kind carries a [`SchemaBase`] (the `required`
//! flag and rules) and implements [`Validate`].
//!
//! Validation is a recursive descent that appends findings to a results
//! vector. Paths are dot-separated (`address.zip`, `items.2`) and the root
//! path is empty.

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

use super::array_schema::ArraySchema;
use super::object_schema::ObjectSchema;
use super::property_schema::PropertySchema;
use super::rule::ValidationRule;
use super::type_matcher::TypeMatcher;
use super::validation_error;
use super::validation_result::{ValidationResult, ValidationResultType};
use crate::convert::type_code::TypeCode;
use crate::convert::type_converter::TypeConverter;
use crate::error::application_error::CommonsResult;

/// Required flag and rules common to every schema kind
#[derive(Debug, Clone, Default)]
pub struct SchemaBase {
    required: bool,
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl SchemaBase {
    pub fn new(required: bool, rules: Vec<Arc<dyn ValidationRule>>) -> Self {
        Self { required, rules }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn rules(&self) -> &[Arc<dyn ValidationRule>] {
        &self.rules
    }

    /// Checks presence, then runs the rules against a present value
    pub fn perform_validation(
        &self,
        path: &str,
        value: Option<&Value>,
        results: &mut Vec<ValidationResult>,
    ) {
        match present(value) {
            None if self.required => results.push(ValidationResult::new(
                path,
                ValidationResultType::Error,
                "VALUE_IS_NULL",
                format!("{} must not be null", display_name(path)),
                Some(json!("NOT NULL")),
                None,
            )),
            None => {}
            Some(value) => {
                for rule in &self.rules {
                    rule.validate(path, value, results);
                }
            }
        }
    }
}

/// Validation entry points shared by all schema kinds
pub trait Validate {
    /// Validates `value` located at `path`, appending findings to `results`
    fn perform_validation(
        &self,
        path: &str,
        value: Option<&Value>,
        results: &mut Vec<ValidationResult>,
    );

    /// Validates a value from the root
    fn validate(&self, value: &Value) -> Vec<ValidationResult> {
        let mut results = Vec::new();
        self.perform_validation("", Some(value), &mut results);
        results
    }

    /// Validates a value and fails with a BadRequest `INVALID_DATA` error
    /// when there are errors, or warnings in strict mode
    fn validate_and_throw(
        &self,
        correlation_id: Option<&str>,
        value: &Value,
        strict: bool,
    ) -> CommonsResult<()> {
        let results = self.validate(value);
        validation_error::throw_if_needed(correlation_id, &results, strict)
    }
}

/// Builder methods shared by all schema kinds
pub trait SchemaBuilder: Sized {
    fn base_mut(&mut self) -> &mut SchemaBase;

    fn make_required(mut self) -> Self {
        self.base_mut().required = true;
        self
    }

    fn make_optional(mut self) -> Self {
        self.base_mut().required = false;
        self
    }

    fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.base_mut().rules.push(Arc::new(rule));
        self
    }
}

/// Declared type of a property, array element or primitive value
#[derive(Debug, Clone)]
pub enum ValueType {
    /// Fixed type tag
    Code(TypeCode),
    /// Nominal type name, see [`TypeMatcher::match_type_by_name`]
    Name(String),
    /// Nested schema validated recursively
    Schema(Box<Schema>),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Code(code) => write!(f, "{code}"),
            ValueType::Name(name) => f.write_str(name),
            ValueType::Schema(_) => f.write_str("schema"),
        }
    }
}

impl From<TypeCode> for ValueType {
    fn from(code: TypeCode) -> Self {
        ValueType::Code(code)
    }
}

impl From<&str> for ValueType {
    fn from(name: &str) -> Self {
        ValueType::Name(name.to_string())
    }
}

impl From<Schema> for ValueType {
    fn from(schema: Schema) -> Self {
        ValueType::Schema(Box::new(schema))
    }
}

impl From<ObjectSchema> for ValueType {
    fn from(schema: ObjectSchema) -> Self {
        Schema::from(schema).into()
    }
}

impl From<ArraySchema> for ValueType {
    fn from(schema: ArraySchema) -> Self {
        Schema::from(schema).into()
    }
}

/// Checks a value against a declared type
///
/// Nested schemas are always entered, even for absent values, so their
/// own `required` flags apply. Otherwise absent values are skipped.
pub(crate) fn perform_type_validation(
    path: &str,
    value_type: Option<&ValueType>,
    value: Option<&Value>,
    results: &mut Vec<ValidationResult>,
) {
    let Some(value_type) = value_type else {
        return;
    };
    if let ValueType::Schema(schema) = value_type {
        schema.perform_validation(path, value, results);
        return;
    }
    let Some(value) = present(value) else {
        return;
    };

    let actual = TypeConverter::to_type_code(value);
    let matched = match value_type {
        ValueType::Code(expected) => TypeMatcher::match_type(*expected, actual, value),
        ValueType::Name(expected) => TypeMatcher::match_type_by_name(expected, actual, value),
        ValueType::Schema(_) => true,
    };
    if !matched {
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "TYPE_MISMATCH",
            format!(
                "{} type must be {} but found {}",
                display_name(path),
                value_type,
                actual
            ),
            Some(json!(value_type.to_string())),
            Some(json!(actual.as_str())),
        ));
    }
}

/// Treats JSON null as absent
pub(crate) fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Name used in messages, `value` at the root
pub(crate) fn display_name(path: &str) -> &str {
    if path.is_empty() { "value" } else { path }
}

pub(crate) fn compose_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// Schema for a single value with an optional declared type
#[derive(Debug, Clone, Default)]
pub struct PrimitiveSchema {
    base: SchemaBase,
    value_type: Option<ValueType>,
}

impl PrimitiveSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, value_type: impl Into<ValueType>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn value_type(&self) -> Option<&ValueType> {
        self.value_type.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.base.is_required()
    }
}

impl SchemaBuilder for PrimitiveSchema {
    fn base_mut(&mut self) -> &mut SchemaBase {
        &mut self.base
    }
}

impl Validate for PrimitiveSchema {
    fn perform_validation(
        &self,
        path: &str,
        value: Option<&Value>,
        results: &mut Vec<ValidationResult>,
    ) {
        self.base.perform_validation(path, value, results);
        perform_type_validation(path, self.value_type.as_ref(), value, results);
    }
}

/// Any schema kind
#[derive(Debug, Clone)]
pub enum Schema {
    Primitive(PrimitiveSchema),
    Object(ObjectSchema),
    Property(PropertySchema),
    Array(ArraySchema),
}

impl Schema {
    pub fn is_required(&self) -> bool {
        match self {
            Schema::Primitive(schema) => schema.is_required(),
            Schema::Object(schema) => schema.is_required(),
            Schema::Property(schema) => schema.is_required(),
            Schema::Array(schema) => schema.is_required(),
        }
    }
}

impl Validate for Schema {
    fn perform_validation(
        &self,
        path: &str,
        value: Option<&Value>,
        results: &mut Vec<ValidationResult>,
    ) {
        match self {
            Schema::Primitive(schema) => schema.perform_validation(path, value, results),
            Schema::Object(schema) => schema.perform_validation(path, value, results),
            Schema::Property(schema) => schema.perform_validation(path, value, results),
            Schema::Array(schema) => schema.perform_validation(path, value, results),
        }
    }
}

impl From<PrimitiveSchema> for Schema {
    fn from(schema: PrimitiveSchema) -> Self {
        Schema::Primitive(schema)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Schema::Object(schema)
    }
}

impl From<PropertySchema> for Schema {
    fn from(schema: PropertySchema) -> Self {
        Schema::Property(schema)
    }
}

impl From<ArraySchema> for Schema {
    fn from(schema: ArraySchema) -> Self {
        Schema::Array(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::object_comparator::CompareOperation;
    use crate::validate::rules::value_comparison::ValueComparisonRule;

    #[test]
    fn test_required_primitive() {
        let schema = PrimitiveSchema::new().make_required();
        let results = schema.validate(&Value::Null);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path(), "");
        assert_eq!(results[0].code(), "VALUE_IS_NULL");
        assert_eq!(results[0].message(), "value must not be null");

        assert!(schema.validate(&json!(1)).is_empty());
    }

    #[test]
    fn test_optional_absence_is_fine() {
        let schema = PrimitiveSchema::new().with_type(TypeCode::String);
        assert!(schema.validate(&Value::Null).is_empty());
    }

    #[test]
    fn test_primitive_type_mismatch() {
        let schema = PrimitiveSchema::new().with_type(TypeCode::Boolean);
        let results = schema.validate(&json!("yes"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "TYPE_MISMATCH");
        assert_eq!(results[0].message(), "value type must be boolean but found string");
    }

    #[test]
    fn test_rules_skip_absent_values() {
        let schema = PrimitiveSchema::new()
            .with_rule(ValueComparisonRule::new(CompareOperation::Gt, json!(1)));
        assert!(schema.validate(&Value::Null).is_empty());
        assert_eq!(schema.validate(&json!(0)).len(), 1);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_schemas_and_rules_are_send_sync() {
        assert_send_sync::<Schema>();
        assert_send_sync::<PrimitiveSchema>();
        assert_send_sync::<ObjectSchema>();
        assert_send_sync::<PropertySchema>();
        assert_send_sync::<ArraySchema>();
        assert_send_sync::<crate::validate::rules::logic::AndRule>();
        assert_send_sync::<crate::validate::rules::logic::OrRule>();
        assert_send_sync::<crate::validate::rules::logic::NotRule>();
        assert_send_sync::<std::sync::Arc<dyn ValidationRule>>();
    }

    #[test]
    fn test_shared_schema_across_threads() {
        let schema = Arc::new(ObjectSchema::new().with_required_property("id", TypeCode::String));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let schema = Arc::clone(&schema);
                std::thread::spawn(move || schema.validate(&json!({ "id": i })).len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }

    #[test]
    fn test_validate_and_throw() {
        let schema: Schema = PrimitiveSchema::new().make_required().into();
        let err = schema.validate_and_throw(Some("123"), &Value::Null, false).unwrap_err();
        assert_eq!(err.code(), "INVALID_DATA");
        assert_eq!(err.message(), "Validation failed: value must not be null");
        assert!(schema.validate_and_throw(None, &json!("x"), true).is_ok());
    }
}
