//! Case-insensitive access to map properties

use serde_json::{Map, Value};

/// Reads properties from dynamic maps
pub struct ObjectReader;

impl ObjectReader {
    /// Property value by name, ignoring ASCII case; exact matches win
    pub fn get_property<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
        value.as_object().and_then(|map| Self::get_from_map(map, name))
    }

    pub fn get_from_map<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
        Self::get_entry(map, name, |_| false).map(|(_, value)| value)
    }

    /// Matching key and value, skipping keys for which `is_taken` holds
    ///
    /// An exact key wins over a case-insensitive one.
    pub fn get_entry<'a>(
        map: &'a Map<String, Value>,
        name: &str,
        is_taken: impl Fn(&str) -> bool,
    ) -> Option<(&'a String, &'a Value)> {
        map.get_key_value(name)
            .filter(|(key, _)| !is_taken(key))
            .or_else(|| {
                map.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name) && !is_taken(key))
            })
    }

    /// Whether a property exists with a non-null value
    pub fn has_property(value: &Value, name: &str) -> bool {
        Self::get_property(value, name).is_some_and(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_property_ignores_case() {
        let value = json!({ "Name": "a", "name": "b", "Id": 1 });
        assert_eq!(ObjectReader::get_property(&value, "name"), Some(&json!("b")));
        assert_eq!(ObjectReader::get_property(&value, "ID"), Some(&json!(1)));
        assert_eq!(ObjectReader::get_property(&value, "missing"), None);
        assert_eq!(ObjectReader::get_property(&json!([1]), "0"), None);
    }

    #[test]
    fn test_get_entry_skips_taken_keys() {
        let map = json!({ "Id": 1, "id": 2 });
        let map = map.as_object().unwrap();

        let (key, value) = ObjectReader::get_entry(map, "id", |_| false).unwrap();
        assert_eq!((key.as_str(), value), ("id", &json!(2)));

        let (key, _) = ObjectReader::get_entry(map, "id", |k| k == "id").unwrap();
        assert_eq!(key, "Id");

        assert!(ObjectReader::get_entry(map, "ID", |_| true).is_none());
    }

    #[test]
    fn test_has_property() {
        let value = json!({ "a": null, "b": 0 });
        assert!(!ObjectReader::has_property(&value, "a"));
        assert!(ObjectReader::has_property(&value, "B"));
    }
}
