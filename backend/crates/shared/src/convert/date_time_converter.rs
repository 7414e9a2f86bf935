//! Date/time coercion and the wire format for dates
//!
//! Dates travel as `YYYY-MM-DDTHH:MM:SS.mmmZ`: always UTC, millisecond
//! precision (sub-millisecond digits are truncated, not rounded) and a
//! literal `Z` instead of a numeric offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// chrono format string of the wire format
pub const ISO_MILLIS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Converts dynamic values to UTC timestamps
pub struct DateTimeConverter;

impl DateTimeConverter {
    /// Parses strings and epoch milliseconds into a UTC timestamp
    ///
    /// Accepted strings: RFC 3339 with any offset, naive date-times (read as
    /// UTC) and plain `YYYY-MM-DD` dates (midnight UTC).
    pub fn to_nullable_datetime(value: &Value) -> Option<DateTime<Utc>> {
        match value {
            Value::String(s) => Self::parse(s.trim()),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        }
    }

    /// Like [`to_nullable_datetime`](Self::to_nullable_datetime) with the Unix epoch as fallback
    pub fn to_datetime(value: &Value) -> DateTime<Utc> {
        Self::to_datetime_with_default(value, DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn to_datetime_with_default(value: &Value, default: DateTime<Utc>) -> DateTime<Utc> {
        Self::to_nullable_datetime(value).unwrap_or(default)
    }

    /// Parses a date string, see [`to_nullable_datetime`](Self::to_nullable_datetime)
    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Formats a timestamp in the wire format
    pub fn to_iso_string(value: &DateTime<Utc>) -> String {
        value.format(ISO_MILLIS_FORMAT).to_string()
    }
}

/// Serde helper for nested dates in the wire format
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Event {
///     #[serde(with = "commons::convert::date_time_converter::iso_millis")]
///     at: DateTime<Utc>,
/// }
/// ```
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::DateTimeConverter;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&DateTimeConverter::to_iso_string(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTimeConverter::parse(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid date-time: {s}")))
    }
}
