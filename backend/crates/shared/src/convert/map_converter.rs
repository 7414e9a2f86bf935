//! Map coercion

use serde_json::{Map, Value};

/// Converts decoded values into uniform key/value maps
pub struct MapConverter;

impl MapConverter {
    /// Objects as-is; arrays become maps keyed by index (`"0"`, `"1"`, ...)
    ///
    /// Scalars and null cannot be interpreted as a map and give `None`.
    pub fn to_nullable_map(value: &Value) -> Option<Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map.clone()),
            Value::Array(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item.clone()))
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn to_map(value: &Value) -> Map<String, Value> {
        Self::to_map_with_default(value, Map::new())
    }

    pub fn to_map_with_default(value: &Value, default: Map<String, Value>) -> Map<String, Value> {
        Self::to_nullable_map(value).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_nullable_map() {
        let map = MapConverter::to_nullable_map(&json!({"a": 1})).unwrap();
        assert_eq!(map["a"], 1);

        let map = MapConverter::to_nullable_map(&json!(["x", "y"])).unwrap();
        assert_eq!(Value::Object(map), json!({"0": "x", "1": "y"}));

        assert!(MapConverter::to_nullable_map(&json!("abc")).is_none());
        assert!(MapConverter::to_map(&Value::Null).is_empty());
    }
}
