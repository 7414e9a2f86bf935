//! Boolean coercion

use serde_json::Value;

const TRUE_WORDS: &[&str] = &["1", "true", "t", "yes", "y"];
const FALSE_WORDS: &[&str] = &["0", "false", "f", "no", "n"];

/// Converts dynamic values to booleans
pub struct BooleanConverter;

impl BooleanConverter {
    /// Booleans as-is, yes/no words (case-insensitive), numbers by non-zero
    pub fn to_nullable_boolean(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|f| f != 0.0),
            Value::String(s) => {
                let word = s.trim().to_ascii_lowercase();
                if TRUE_WORDS.contains(&word.as_str()) {
                    Some(true)
                } else if FALSE_WORDS.contains(&word.as_str()) {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn to_boolean(value: &Value) -> bool {
        Self::to_boolean_with_default(value, false)
    }

    pub fn to_boolean_with_default(value: &Value, default: bool) -> bool {
        Self::to_nullable_boolean(value).unwrap_or(default)
    }
}
