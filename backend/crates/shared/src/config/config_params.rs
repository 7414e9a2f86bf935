//! Key-value component configuration
//!
//! [`ConfigParams`] is a flat, insertion-ordered map of string keys to
//! string values. Dots in keys form sections: `connection.host` belongs to
//! the `connection` section.
//!
//! ## Examples
//!
//! ```
//! use commons::config::config_params::ConfigParams;
//!
//! let config =
//!     ConfigParams::from_string("timeout=30;connection.host=localhost;connection.port=8080");
//!
//! assert_eq!(config.get_as_integer_with_default("timeout", 10), 30);
//! assert_eq!(config.get_section_names(), ["timeout", "connection"]);
//!
//! let connection = config.get_section("connection");
//! assert_eq!(connection.get("host"), Some("localhost"));
//! ```

use std::fmt;

use serde_json::Value;

use crate::convert::boolean_converter::BooleanConverter;
use crate::convert::number_converter::{FloatConverter, IntegerConverter};
use crate::error::application_error::{ApplicationError, CommonsResult};

/// Code of errors raised for missing required keys
pub const MISSING_KEY_CODE: &str = "MISSING_KEY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigParams {
    entries: Vec<(String, String)>,
}

impl ConfigParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters from `(key, value)` pairs; later keys override earlier ones
    pub fn from_tuples<K, V>(tuples: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = Self::new();
        for (key, value) in tuples {
            config.put(key, value);
        }
        config
    }

    /// Parses `key1=value1;key2=value2`
    ///
    /// Empty segments are skipped. A segment without `=` sets the key to an
    /// empty value.
    pub fn from_string(line: &str) -> Self {
        let mut config = Self::new();
        for segment in line.split(';') {
            if segment.trim().is_empty() {
                continue;
            }
            match segment.split_once('=') {
                Some((key, value)) => config.put(key.trim(), value.trim()),
                None => config.put(segment.trim(), ""),
            }
        }
        config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|index| self.entries[index].1.as_str())
    }

    /// Sets a value, keeping the original position of an existing key
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn get_value(&self, key: &str) -> Option<Value> {
        self.get(key).map(|value| Value::String(value.to_string()))
    }

    // =========================================================================
    // Typed getters
    // =========================================================================

    pub fn get_as_nullable_string(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub fn get_as_string_with_default(&self, key: &str, default: &str) -> String {
        self.get_as_nullable_string(key)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_as_nullable_integer(&self, key: &str) -> Option<i64> {
        self.get_value(key)
            .and_then(|value| IntegerConverter::to_nullable_long(&value))
    }

    pub fn get_as_integer_with_default(&self, key: &str, default: i64) -> i64 {
        self.get_as_nullable_integer(key).unwrap_or(default)
    }

    pub fn get_as_nullable_float(&self, key: &str) -> Option<f64> {
        self.get_value(key)
            .and_then(|value| FloatConverter::to_nullable_double(&value))
    }

    pub fn get_as_float_with_default(&self, key: &str, default: f64) -> f64 {
        self.get_as_nullable_float(key).unwrap_or(default)
    }

    pub fn get_as_nullable_boolean(&self, key: &str) -> Option<bool> {
        self.get_value(key)
            .and_then(|value| BooleanConverter::to_nullable_boolean(&value))
    }

    pub fn get_as_boolean_with_default(&self, key: &str, default: bool) -> bool {
        self.get_as_nullable_boolean(key).unwrap_or(default)
    }

    /// Value of a key that must be present
    ///
    /// # Errors
    ///
    /// Config error `MISSING_KEY` when the key is absent.
    pub fn get_required(&self, key: &str) -> CommonsResult<&str> {
        self.get(key).ok_or_else(|| {
            ApplicationError::config(
                None,
                Some(MISSING_KEY_CODE),
                Some(&format!("Missing configuration parameter {key}")),
            )
            .with_details("key", key)
        })
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Distinct section names in first-seen order
    ///
    /// A key without dots counts as its own section.
    pub fn get_section_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for key in self.keys() {
            let name = match key.find('.') {
                Some(pos) if pos > 0 => &key[..pos],
                _ => key,
            };
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Parameters under `section.` with the prefix stripped
    pub fn get_section(&self, section: &str) -> ConfigParams {
        let prefix = format!("{section}.");
        Self::from_tuples(
            self.iter()
                .filter_map(|(key, value)| key.strip_prefix(&prefix).map(|k| (k, value))),
        )
    }

    /// Adds every parameter of `params` under `section.`; an empty name adds them as is
    pub fn add_section(&mut self, section: &str, params: &ConfigParams) {
        for (key, value) in params.iter() {
            if section.is_empty() {
                self.put(key, value);
            } else {
                self.put(format!("{section}.{key}"), value);
            }
        }
    }

    /// Copy of these parameters with `other` taking precedence
    pub fn override_with(&self, other: &ConfigParams) -> ConfigParams {
        let mut result = self.clone();
        result.add_section("", other);
        result
    }

    /// Copy of these parameters with `defaults` filling the gaps
    pub fn set_defaults(&self, defaults: &ConfigParams) -> ConfigParams {
        defaults.override_with(self)
    }
}

impl fmt::Display for ConfigParams {
    /// Renders as `key1=value1;key2=value2`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Component configured from [`ConfigParams`]
pub trait Configurable {
    fn configure(&mut self, config: &ConfigParams) -> CommonsResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::category::ErrorCategory;

    #[test]
    fn test_from_string() {
        let config = ConfigParams::from_string("a=1; b.c = 2;;flag");
        assert_eq!(config.len(), 3);
        assert_eq!(config.get("a"), Some("1"));
        assert_eq!(config.get("b.c"), Some("2"));
        assert_eq!(config.get("flag"), Some(""));
        assert_eq!(config.to_string(), "a=1;b.c=2;flag=");
    }

    #[test]
    fn test_put_keeps_position() {
        let mut config = ConfigParams::from_tuples([("a", "1"), ("b", "2")]);
        config.put("a", "3");
        assert_eq!(config.to_string(), "a=3;b=2");
        assert_eq!(config.remove("a"), Some("3".to_string()));
        assert!(!config.contains_key("a"));
    }

    #[test]
    fn test_typed_getters() {
        let config = ConfigParams::from_string("port=8080;ratio=0.5;enabled=yes;name=svc");
        assert_eq!(config.get_as_nullable_integer("port"), Some(8080));
        assert_eq!(config.get_as_integer_with_default("name", 7), 7);
        assert_eq!(config.get_as_float_with_default("ratio", 1.0), 0.5);
        assert_eq!(config.get_as_nullable_boolean("enabled"), Some(true));
        assert!(config.get_as_boolean_with_default("missing", true));
        assert_eq!(config.get_as_string_with_default("missing", "x"), "x");
    }

    #[test]
    fn test_get_required() {
        let config = ConfigParams::from_string("host=localhost");
        assert_eq!(config.get_required("host").unwrap(), "localhost");

        let err = config.get_required("port").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Misconfiguration);
        assert_eq!(err.code(), "MISSING_KEY");
        assert_eq!(err.details()["key"], "port");
    }

    #[test]
    fn test_sections() {
        let config = ConfigParams::from_string("a.x=1;b.y=2;a.z=3;c=4");
        assert_eq!(config.get_section_names(), ["a", "b", "c"]);

        let section = config.get_section("a");
        assert_eq!(section.to_string(), "x=1;z=3");

        let mut merged = ConfigParams::new();
        merged.add_section("db", &section);
        assert_eq!(merged.get("db.z"), Some("3"));
    }

    #[test]
    fn test_override_and_defaults() {
        let config = ConfigParams::from_string("a=1;b=2");
        let other = ConfigParams::from_string("b=3;c=4");

        assert_eq!(config.override_with(&other).to_string(), "a=1;b=3;c=4");
        assert_eq!(config.set_defaults(&other).to_string(), "b=2;c=4;a=1");
    }

    #[derive(Default)]
    struct Component {
        host: String,
    }

    impl Configurable for Component {
        fn configure(&mut self, config: &ConfigParams) -> CommonsResult<()> {
            self.host = config.get_required("host")?.to_string();
            Ok(())
        }
    }

    #[test]
    fn test_configurable() {
        let mut component = Component::default();
        assert!(component.configure(&ConfigParams::new()).is_err());
        component
            .configure(&ConfigParams::from_string("host=db"))
            .unwrap();
        assert_eq!(component.host, "db");
    }
}
