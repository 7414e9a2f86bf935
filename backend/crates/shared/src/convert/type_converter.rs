//! Type-code driven conversion of dynamic values

use serde_json::{Number, Value};

use super::array_converter::ArrayConverter;
use super::boolean_converter::BooleanConverter;
use super::date_time_converter::DateTimeConverter;
use super::map_converter::MapConverter;
use super::number_converter::{FloatConverter, IntegerConverter};
use super::string_converter::StringConverter;
use super::type_code::TypeCode;

/// Resolves and coerces values by [`TypeCode`]
///
/// ## Examples
/// ```rust
/// use commons::convert::{type_code::TypeCode, type_converter::TypeConverter};
/// use serde_json::json;
///
/// assert_eq!(TypeConverter::to_type_code(&json!("abc")), TypeCode::String);
/// assert_eq!(TypeConverter::to_nullable_type(TypeCode::Long, &json!("123")), Some(json!(123)));
/// ```
pub struct TypeConverter;

impl TypeConverter {
    /// Runtime type tag of a value
    ///
    /// Integral numbers inside the `i32` range are `Integer`, other
    /// integral numbers `Long`, fractional numbers `Double`. Objects are
    /// `Map`. Null is `Unknown`.
    pub fn to_type_code(value: &Value) -> TypeCode {
        match value {
            Value::Null => TypeCode::Unknown,
            Value::Bool(_) => TypeCode::Boolean,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i32::try_from(i).is_ok() {
                        TypeCode::Integer
                    } else {
                        TypeCode::Long
                    }
                } else if n.is_u64() {
                    TypeCode::Long
                } else {
                    TypeCode::Double
                }
            }
            Value::String(_) => TypeCode::String,
            Value::Array(_) => TypeCode::Array,
            Value::Object(_) => TypeCode::Map,
        }
    }

    /// Coerces a value to the given type, `None` when that is not possible
    ///
    /// `DateTime` values are rendered in the wire format and `Duration`
    /// values as milliseconds. `Object` and `Unknown` pass values through.
    pub fn to_nullable_type(type_code: TypeCode, value: &Value) -> Option<Value> {
        if value.is_null() {
            return None;
        }
        match type_code {
            TypeCode::String | TypeCode::Enum => {
                StringConverter::to_nullable_string(value).map(Value::String)
            }
            TypeCode::Boolean => BooleanConverter::to_nullable_boolean(value).map(Value::Bool),
            TypeCode::Integer => IntegerConverter::to_nullable_integer(value).map(Value::from),
            TypeCode::Long | TypeCode::Duration => match value {
                // unsigned beyond i64 keeps its exact value
                Value::Number(n) if n.is_u64() && n.as_i64().is_none() => Some(value.clone()),
                _ => IntegerConverter::to_nullable_long(value).map(Value::from),
            },
            TypeCode::Float | TypeCode::Double => FloatConverter::to_nullable_double(value)
                .and_then(Number::from_f64)
                .map(Value::Number),
            TypeCode::DateTime => DateTimeConverter::to_nullable_datetime(value)
                .map(|dt| Value::String(DateTimeConverter::to_iso_string(&dt))),
            TypeCode::Array => ArrayConverter::to_nullable_array(value).map(Value::Array),
            TypeCode::Map => MapConverter::to_nullable_map(value).map(Value::Object),
            TypeCode::Object | TypeCode::Unknown => Some(value.clone()),
        }
    }

    /// Like [`to_nullable_type`](Self::to_nullable_type) with a fallback
    pub fn to_type_with_default(type_code: TypeCode, value: &Value, default: Value) -> Value {
        Self::to_nullable_type(type_code, value).unwrap_or(default)
    }
}
