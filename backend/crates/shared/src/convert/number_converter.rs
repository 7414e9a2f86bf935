//! Integer and floating point coercion

use serde_json::Value;

/// Converts dynamic values to 64-bit integers
///
/// Fractions are truncated toward zero. Covers both `Integer` and `Long`
/// type codes.
pub struct IntegerConverter;

impl IntegerConverter {
    pub fn to_nullable_long(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(truncate)),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(truncate))
            }
            _ => None,
        }
    }

    pub fn to_long(value: &Value) -> i64 {
        Self::to_long_with_default(value, 0)
    }

    pub fn to_long_with_default(value: &Value, default: i64) -> i64 {
        Self::to_nullable_long(value).unwrap_or(default)
    }

    /// Like [`to_nullable_long`](Self::to_nullable_long), `None` outside the `i32` range
    pub fn to_nullable_integer(value: &Value) -> Option<i32> {
        Self::to_nullable_long(value).and_then(|l| i32::try_from(l).ok())
    }

    pub fn to_integer(value: &Value) -> i32 {
        Self::to_integer_with_default(value, 0)
    }

    pub fn to_integer_with_default(value: &Value, default: i32) -> i32 {
        Self::to_nullable_integer(value).unwrap_or(default)
    }
}

fn truncate(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// Converts dynamic values to floating point numbers
///
/// Covers both `Float` and `Double` type codes.
pub struct FloatConverter;

impl FloatConverter {
    pub fn to_nullable_double(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    pub fn to_double(value: &Value) -> f64 {
        Self::to_double_with_default(value, 0.0)
    }

    pub fn to_double_with_default(value: &Value, default: f64) -> f64 {
        Self::to_nullable_double(value).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_nullable_long() {
        assert_eq!(IntegerConverter::to_nullable_long(&json!(123)), Some(123));
        assert_eq!(IntegerConverter::to_nullable_long(&json!(123.9)), Some(123));
        assert_eq!(IntegerConverter::to_nullable_long(&json!(-2.5)), Some(-2));
        assert_eq!(IntegerConverter::to_nullable_long(&json!("42")), Some(42));
        assert_eq!(IntegerConverter::to_nullable_long(&json!("4.7")), Some(4));
        assert_eq!(IntegerConverter::to_nullable_long(&json!(true)), Some(1));
        assert_eq!(IntegerConverter::to_nullable_long(&json!("ABC")), None);
        assert_eq!(IntegerConverter::to_nullable_long(&Value::Null), None);
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(IntegerConverter::to_nullable_integer(&json!(5_000_000_000i64)), None);
        assert_eq!(IntegerConverter::to_integer_with_default(&json!("x"), 7), 7);
    }

    #[test]
    fn test_to_nullable_double() {
        assert_eq!(FloatConverter::to_nullable_double(&json!(1.5)), Some(1.5));
        assert_eq!(FloatConverter::to_nullable_double(&json!("2.25")), Some(2.25));
        assert_eq!(FloatConverter::to_nullable_double(&json!(false)), Some(0.0));
        assert_eq!(FloatConverter::to_nullable_double(&json!({})), None);
        assert_eq!(FloatConverter::to_double_with_default(&json!("NaN"), 3.0), 3.0);
    }
}
