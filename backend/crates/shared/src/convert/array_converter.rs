//! Array coercion

use serde_json::Value;

/// Converts dynamic values to arrays
pub struct ArrayConverter;

impl ArrayConverter {
    /// Arrays as-is, null as `None`, any other value wrapped in a single-item array
    pub fn to_nullable_array(value: &Value) -> Option<Vec<Value>> {
        match value {
            Value::Null => None,
            Value::Array(items) => Some(items.clone()),
            other => Some(vec![other.clone()]),
        }
    }

    pub fn to_array(value: &Value) -> Vec<Value> {
        Self::to_array_with_default(value, Vec::new())
    }

    pub fn to_array_with_default(value: &Value, default: Vec<Value>) -> Vec<Value> {
        Self::to_nullable_array(value).unwrap_or(default)
    }

    /// Like [`to_array`](Self::to_array), but strings are split on `,`
    ///
    /// ```rust
    /// use commons::convert::array_converter::ArrayConverter;
    /// use serde_json::json;
    ///
    /// assert_eq!(ArrayConverter::list_to_array(&json!("a,b")), vec![json!("a"), json!("b")]);
    /// ```
    pub fn list_to_array(value: &Value) -> Vec<Value> {
        match value {
            Value::String(s) => s
                .split(',')
                .map(|item| Value::String(item.to_string()))
                .collect(),
            other => Self::to_array(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_nullable_array() {
        assert_eq!(ArrayConverter::to_nullable_array(&Value::Null), None);
        assert_eq!(ArrayConverter::to_nullable_array(&json!(2)), Some(vec![json!(2)]));
        assert_eq!(
            ArrayConverter::to_nullable_array(&json!([1, 2])),
            Some(vec![json!(1), json!(2)])
        );
    }

    #[test]
    fn test_list_to_array() {
        assert_eq!(ArrayConverter::list_to_array(&json!("")), vec![json!("")]);
        assert_eq!(ArrayConverter::list_to_array(&json!([1])), vec![json!(1)]);
        assert!(ArrayConverter::list_to_array(&Value::Null).is_empty());
    }
}
