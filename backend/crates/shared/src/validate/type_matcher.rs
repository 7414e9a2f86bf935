//! Matching of declared types against runtime values

use serde_json::Value;

use crate::convert::date_time_converter::DateTimeConverter;
use crate::convert::type_code::TypeCode;

/// Decides whether a value satisfies a declared type
///
/// Dynamic data gets some slack: any numeric type satisfies any other
/// numeric type, date strings satisfy `DateTime`, numbers (milliseconds)
/// satisfy `Duration` and strings satisfy `Enum`. `Object` and `Unknown`
/// accept everything.
pub struct TypeMatcher;

impl TypeMatcher {
    pub fn match_type(expected: TypeCode, actual: TypeCode, value: &Value) -> bool {
        if expected == actual {
            return true;
        }
        match expected {
            TypeCode::Object | TypeCode::Unknown => true,
            TypeCode::Integer
            | TypeCode::Long
            | TypeCode::Float
            | TypeCode::Double
            | TypeCode::Duration => actual.is_numeric(),
            TypeCode::DateTime => {
                actual == TypeCode::String
                    && value
                        .as_str()
                        .is_some_and(|s| DateTimeConverter::parse(s).is_some())
            }
            TypeCode::Enum => actual == TypeCode::String,
            _ => false,
        }
    }

    /// Matches by a nominal type name such as `"int"`, `"dict"` or `"string[]"`
    ///
    /// Names are case-insensitive. Unknown names never match.
    pub fn match_type_by_name(expected: &str, actual: TypeCode, value: &Value) -> bool {
        let name = expected.trim().to_lowercase();
        if name.ends_with("[]") {
            return actual == TypeCode::Array;
        }
        let code = match name.as_str() {
            "object" | "any" => TypeCode::Object,
            "int" | "integer" => TypeCode::Integer,
            "long" => TypeCode::Long,
            "float" | "double" | "number" => TypeCode::Double,
            "string" | "str" => TypeCode::String,
            "bool" | "boolean" => TypeCode::Boolean,
            "date" | "datetime" => TypeCode::DateTime,
            "timespan" | "duration" => TypeCode::Duration,
            "enum" => TypeCode::Enum,
            "map" | "dict" | "dictionary" => TypeCode::Map,
            "array" | "list" => TypeCode::Array,
            _ => return false,
        };
        Self::match_type(code, actual, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_type_code() {
        assert!(TypeMatcher::match_type(TypeCode::String, TypeCode::String, &json!("a")));
        assert!(TypeMatcher::match_type(TypeCode::Long, TypeCode::Integer, &json!(1)));
        assert!(TypeMatcher::match_type(TypeCode::Integer, TypeCode::Double, &json!(1.5)));
        assert!(TypeMatcher::match_type(TypeCode::Object, TypeCode::Array, &json!([])));
        assert!(!TypeMatcher::match_type(TypeCode::String, TypeCode::Integer, &json!(123)));
        assert!(!TypeMatcher::match_type(TypeCode::Map, TypeCode::Array, &json!([])));
    }

    #[test]
    fn test_date_strings_match_datetime() {
        assert!(TypeMatcher::match_type(
            TypeCode::DateTime,
            TypeCode::String,
            &json!("2020-01-02T03:04:05Z")
        ));
        assert!(!TypeMatcher::match_type(TypeCode::DateTime, TypeCode::String, &json!("soon")));
    }

    #[test]
    fn test_numbers_match_duration() {
        assert!(TypeMatcher::match_type(
            TypeCode::Duration,
            TypeCode::Long,
            &json!(5_000_000_000i64)
        ));
        assert!(TypeMatcher::match_type(TypeCode::Duration, TypeCode::Double, &json!(1.5)));
        assert!(!TypeMatcher::match_type(TypeCode::Duration, TypeCode::String, &json!("1s")));
    }

    #[test]
    fn test_match_type_by_name() {
        assert!(TypeMatcher::match_type_by_name("int", TypeCode::Integer, &json!(1)));
        assert!(TypeMatcher::match_type_by_name("Dict", TypeCode::Map, &json!({})));
        assert!(TypeMatcher::match_type_by_name("string[]", TypeCode::Array, &json!([])));
        assert!(TypeMatcher::match_type_by_name("any", TypeCode::Boolean, &json!(true)));
        assert!(!TypeMatcher::match_type_by_name("bool", TypeCode::String, &json!("true")));
        assert!(!TypeMatcher::match_type_by_name("Widget", TypeCode::Map, &json!({})));
    }
}
