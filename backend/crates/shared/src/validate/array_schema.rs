//! Schema for arrays with a declared element type

use serde_json::{Value, json};

use super::schema::{
    SchemaBase, SchemaBuilder, Validate, ValueType, compose_path, display_name,
    perform_type_validation, present,
};
use super::validation_result::{ValidationResult, ValidationResultType};
use crate::convert::type_converter::TypeConverter;

/// Array schema; every element is checked against `value_type`
#[derive(Debug, Clone, Default)]
pub struct ArraySchema {
    base: SchemaBase,
    value_type: Option<ValueType>,
}

impl ArraySchema {
    pub fn new(value_type: impl Into<ValueType>) -> Self {
        Self {
            base: SchemaBase::default(),
            value_type: Some(value_type.into()),
        }
    }

    /// Array whose elements are not checked
    pub fn untyped() -> Self {
        Self::default()
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

impl SchemaBuilder for ArraySchema {
    fn base_mut(&mut self) -> &mut SchemaBase {
        &mut self.base
    }
}

impl Validate for ArraySchema {
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
        let Value::Array(items) = value else {
            results.push(ValidationResult::new(
                path,
                ValidationResultType::Error,
                "VALUE_ISNOT_ARRAY",
                format!("{} type must be List or Array", display_name(path)),
                Some(json!("List")),
                Some(json!(TypeConverter::to_type_code(value).as_str())),
            ));
            return;
        };

        for (index, item) in items.iter().enumerate() {
            let item_path = compose_path(path, &index.to_string());
            perform_type_validation(&item_path, self.value_type.as_ref(), Some(item), results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::type_code::TypeCode;
    use crate::validate::object_schema::ObjectSchema;

    #[test]
    fn test_element_types() {
        let schema = ArraySchema::new(TypeCode::Integer);
        assert!(schema.validate(&json!([1, 2, 3])).is_empty());

        let results = schema.validate(&json!([1, "two", 3]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path(), "1");
        assert_eq!(results[0].code(), "TYPE_MISMATCH");
    }

    #[test]
    fn test_not_an_array() {
        let results = ArraySchema::new(TypeCode::String).validate(&json!({ "a": 1 }));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_ISNOT_ARRAY");
        assert_eq!(results[0].message(), "value type must be List or Array");
    }

    #[test]
    fn test_array_of_objects_inside_object() {
        let item = ObjectSchema::new().with_required_property("sku", TypeCode::String);
        let schema = ObjectSchema::new().with_required_property("items", ArraySchema::new(item));

        let results = schema.validate(&json!({ "items": [{ "sku": "a" }, {}] }));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path(), "items.1.sku");
    }

    #[test]
    fn test_required_array() {
        let schema = ArraySchema::untyped().make_required();
        assert_eq!(schema.validate(&Value::Null)[0].code(), "VALUE_IS_NULL");
        assert!(schema.validate(&json!([null, 1, "x"])).is_empty());
    }
}
