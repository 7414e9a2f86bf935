//! Value comparison used by comparison rules

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde_json::Value;

use crate::convert::number_converter::FloatConverter;
use crate::convert::string_converter::StringConverter;
use crate::error::parse::ParseEnumError;

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOperation {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    /// Regular expression match anchored at the start of the string form
    Like,
}

impl CompareOperation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CompareOperation::Eq => "==",
            CompareOperation::Ne => "!=",
            CompareOperation::Lt => "<",
            CompareOperation::Gt => ">",
            CompareOperation::Le => "<=",
            CompareOperation::Ge => ">=",
            CompareOperation::Like => "LIKE",
        }
    }
}

impl fmt::Display for CompareOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompareOperation {
    type Err = ParseEnumError;

    /// Accepts symbols (`==`, `<>`, `>=`, ...) and mnemonics (`EQ`, `GE`, `LIKE`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "=" | "==" | "EQ" => Ok(CompareOperation::Eq),
            "!=" | "<>" | "NE" => Ok(CompareOperation::Ne),
            "<" | "LT" => Ok(CompareOperation::Lt),
            ">" | "GT" => Ok(CompareOperation::Gt),
            "<=" | "LE" => Ok(CompareOperation::Le),
            ">=" | "GE" => Ok(CompareOperation::Ge),
            "LIKE" => Ok(CompareOperation::Like),
            _ => Err(ParseEnumError::new("compare operation", s)),
        }
    }
}

/// Compares dynamic values
pub struct ObjectComparator;

impl ObjectComparator {
    pub fn compare(left: &Value, operation: CompareOperation, right: &Value) -> bool {
        match operation {
            CompareOperation::Eq => Self::are_equal(left, right),
            CompareOperation::Ne => !Self::are_equal(left, right),
            CompareOperation::Lt => Self::ordering(left, right).is_some_and(|o| o.is_lt()),
            CompareOperation::Gt => Self::ordering(left, right).is_some_and(|o| o.is_gt()),
            CompareOperation::Le => Self::ordering(left, right).is_some_and(|o| o.is_le()),
            CompareOperation::Ge => Self::ordering(left, right).is_some_and(|o| o.is_ge()),
            CompareOperation::Like => Self::matches(left, right),
        }
    }

    /// Equality with numeric and string-form leniency
    ///
    /// Two nulls are equal; null never equals a present value. Numbers
    /// compare numerically and a string equals any value with the same
    /// string form (`"1" == 1`).
    pub fn are_equal(left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Number(l), Value::Number(r)) => l.as_f64() == r.as_f64(),
            (Value::String(_), _) | (_, Value::String(_)) => {
                StringConverter::to_nullable_string(left)
                    == StringConverter::to_nullable_string(right)
            }
            _ => left == right,
        }
    }

    /// Numeric ordering when both sides convert to numbers, lexical for two strings
    fn ordering(left: &Value, right: &Value) -> Option<std::cmp::Ordering> {
        if let (Some(l), Some(r)) = (
            FloatConverter::to_nullable_double(left),
            FloatConverter::to_nullable_double(right),
        ) {
            return l.partial_cmp(&r);
        }
        match (left, right) {
            (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
            _ => None,
        }
    }

    fn matches(value: &Value, pattern: &Value) -> bool {
        let (Some(value), Some(pattern)) = (
            StringConverter::to_nullable_string(value),
            StringConverter::to_nullable_string(pattern),
        ) else {
            return false;
        };
        match Regex::new(&format!("^(?:{pattern})")) {
            Ok(regex) => regex.is_match(&value),
            Err(e) => {
                tracing::debug!(error = %e, pattern = %pattern, "Invalid LIKE pattern");
                false
            }
        }
    }
}
