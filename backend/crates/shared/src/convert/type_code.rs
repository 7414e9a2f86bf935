//! Logical data type tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::parse::ParseEnumError;

/// Logical data type used to drive conversion and validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCode {
    Unknown,
    String,
    Boolean,
    Integer,
    Long,
    Float,
    Double,
    DateTime,
    Duration,
    Object,
    Enum,
    Array,
    Map,
}

impl TypeCode {
    pub const ALL: [TypeCode; 13] = [
        TypeCode::Unknown,
        TypeCode::String,
        TypeCode::Boolean,
        TypeCode::Integer,
        TypeCode::Long,
        TypeCode::Float,
        TypeCode::Double,
        TypeCode::DateTime,
        TypeCode::Duration,
        TypeCode::Object,
        TypeCode::Enum,
        TypeCode::Array,
        TypeCode::Map,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeCode::Unknown => "unknown",
            TypeCode::String => "string",
            TypeCode::Boolean => "boolean",
            TypeCode::Integer => "integer",
            TypeCode::Long => "long",
            TypeCode::Float => "float",
            TypeCode::Double => "double",
            TypeCode::DateTime => "datetime",
            TypeCode::Duration => "duration",
            TypeCode::Object => "object",
            TypeCode::Enum => "enum",
            TypeCode::Array => "array",
            TypeCode::Map => "map",
        }
    }

    /// Integer, Long, Float or Double
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            TypeCode::Integer | TypeCode::Long | TypeCode::Float | TypeCode::Double
        )
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::new("type code", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        for code in TypeCode::ALL {
            assert_eq!(code.to_string().parse::<TypeCode>().unwrap(), code);
        }
        assert_eq!("DateTime".parse::<TypeCode>().unwrap(), TypeCode::DateTime);
        assert!("decimal".parse::<TypeCode>().is_err());
    }
}
