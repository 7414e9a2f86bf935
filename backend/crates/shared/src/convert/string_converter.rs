//! String coercion

use serde_json::Value;

/// Converts dynamic values to strings
pub struct StringConverter;

impl StringConverter {
    /// Renders a value as a string, `None` for null
    ///
    /// Arrays are joined with `,`; objects are rendered as JSON.
    pub fn to_nullable_string(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| Self::to_nullable_string(item).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::Object(_) => Some(value.to_string()),
        }
    }

    /// Like [`to_nullable_string`](Self::to_nullable_string) with `""` for null
    pub fn to_string(value: &Value) -> String {
        Self::to_string_with_default(value, "")
    }

    pub fn to_string_with_default(value: &Value, default: &str) -> String {
        Self::to_nullable_string(value).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_nullable_string() {
        assert_eq!(StringConverter::to_nullable_string(&Value::Null), None);
        assert_eq!(StringConverter::to_nullable_string(&json!("xyz")).unwrap(), "xyz");
        assert_eq!(StringConverter::to_nullable_string(&json!(123)).unwrap(), "123");
        assert_eq!(StringConverter::to_nullable_string(&json!(true)).unwrap(), "true");
        assert_eq!(StringConverter::to_nullable_string(&json!(["a", 1])).unwrap(), "a,1");
        assert_eq!(
            StringConverter::to_nullable_string(&json!({"a": 1})).unwrap(),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_to_string_with_default() {
        assert_eq!(StringConverter::to_string_with_default(&Value::Null, "xyz"), "xyz");
        assert_eq!(StringConverter::to_string(&Value::Null), "");
    }
}
