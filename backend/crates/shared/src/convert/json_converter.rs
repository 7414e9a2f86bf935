//! JSON text conversion
//!
//! Parsing through [`JsonConverter::from_json`] reports malformed text as
//! an error. The `to_*map` family never fails: text that cannot be
//! interpreted as a map yields `None`, an empty map or the caller's
//! default.

use std::any::Any;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::date_time_converter::DateTimeConverter;
use super::map_converter::MapConverter;
use super::type_code::TypeCode;
use super::type_converter::TypeConverter;
use crate::error::application_error::CommonsResult;

/// Converts values from and to JSON text
///
/// ## Examples
/// ```rust
/// use commons::convert::{json_converter::JsonConverter, type_code::TypeCode};
/// use serde_json::json;
///
/// let value = JsonConverter::from_json(TypeCode::Map, Some("{\"key\":123}")).unwrap();
/// assert_eq!(value, Some(json!({"key": 123})));
///
/// let text = JsonConverter::to_json(Some(&json!({"key": 123}))).unwrap();
/// assert_eq!(text.as_deref(), Some("{\"key\":123}"));
/// ```
pub struct JsonConverter;

impl JsonConverter {
    /// Parses JSON text and coerces the result to `type_code`
    ///
    /// Returns `Ok(None)` for absent text or when the parsed value cannot be
    /// coerced. Malformed JSON is a BadRequest error.
    pub fn from_json(type_code: TypeCode, text: Option<&str>) -> CommonsResult<Option<Value>> {
        let Some(text) = text else {
            return Ok(None);
        };
        let parsed: Value = serde_json::from_str(text)?;
        Ok(TypeConverter::to_nullable_type(type_code, &parsed))
    }

    /// Parses JSON text into a typed value
    pub fn from_json_as<T: DeserializeOwned>(text: Option<&str>) -> CommonsResult<Option<T>> {
        text.map(|text| serde_json::from_str::<T>(text))
            .transpose()
            .map_err(Into::into)
    }

    /// Serializes a value to JSON text, `None` when the value is absent
    ///
    /// A top-level `chrono` timestamp (`DateTime<Utc>`,
    /// `DateTime<FixedOffset>` or `NaiveDateTime`, the latter read as UTC)
    /// is rendered as the bare `YYYY-MM-DDTHH:MM:SS.mmmZ` text. Timestamps
    /// nested inside other values are encoded by their own `Serialize`
    /// impl; use [`iso_millis`](super::date_time_converter::iso_millis) on
    /// such fields to get the same format.
    pub fn to_json<T>(value: Option<&T>) -> CommonsResult<Option<String>>
    where
        T: Serialize + Any,
    {
        let Some(value) = value else {
            return Ok(None);
        };
        if let Some(date) = as_utc_date(value) {
            return Ok(Some(DateTimeConverter::to_iso_string(&date)));
        }
        Self::to_plain_json(Some(value))
    }

    /// Serializes any value with its own `Serialize` impl
    ///
    /// Unlike [`to_json`](Self::to_json) this accepts borrowed and unsized
    /// values and applies no timestamp special case.
    pub fn to_plain_json<T>(value: Option<&T>) -> CommonsResult<Option<String>>
    where
        T: Serialize + ?Sized,
    {
        value
            .map(|value| serde_json::to_string(value))
            .transpose()
            .map_err(Into::into)
    }

    /// Parses JSON text into a map, `None` when that is not possible
    ///
    /// Parse failures are swallowed.
    pub fn to_nullable_map(text: Option<&str>) -> Option<Map<String, Value>> {
        let text = text?;
        match serde_json::from_str::<Value>(text) {
            Ok(value) => MapConverter::to_nullable_map(&value),
            Err(e) => {
                tracing::debug!(error = %e, "JSON text could not be parsed as a map");
                None
            }
        }
    }

    /// Like [`to_nullable_map`](Self::to_nullable_map) with an empty map fallback
    pub fn to_map(text: Option<&str>) -> Map<String, Value> {
        Self::to_nullable_map(text).unwrap_or_default()
    }

    /// Like [`to_nullable_map`](Self::to_nullable_map) with a caller-supplied fallback
    pub fn to_map_with_default(
        text: Option<&str>,
        default: Map<String, Value>,
    ) -> Map<String, Value> {
        Self::to_nullable_map(text).unwrap_or(default)
    }
}

fn as_utc_date(value: &dyn Any) -> Option<DateTime<Utc>> {
    if let Some(date) = value.downcast_ref::<DateTime<Utc>>() {
        Some(*date)
    } else if let Some(date) = value.downcast_ref::<DateTime<FixedOffset>>() {
        Some(date.with_timezone(&Utc))
    } else {
        value
            .downcast_ref::<NaiveDateTime>()
            .map(|naive| naive.and_utc())
    }
}
