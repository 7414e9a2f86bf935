//! Component descriptors
//!
//! A descriptor identifies a component by five fields written as
//! `group:type:kind:name:version`. Any field may be the wildcard `*`,
//! which matches every value of that field.

use std::fmt;
use std::str::FromStr;

use crate::error::application_error::ApplicationError;

const WILDCARD: &str = "*";

/// Locator made of group, type, kind, name and version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Descriptor {
    group: Option<String>,
    type_: Option<String>,
    kind: Option<String>,
    name: Option<String>,
    version: Option<String>,
}

fn field(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty() && *v != WILDCARD)
        .map(str::to_string)
}

fn match_field(left: &Option<String>, right: &Option<String>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left == right,
        _ => true,
    }
}

impl Descriptor {
    /// Creates a descriptor; `None`, `""` and `"*"` all mean "any"
    ///
    /// ```rust
    /// use commons::refer::descriptor::Descriptor;
    ///
    /// let descriptor = Descriptor::new(
    ///     Some("billing"),
    ///     Some("logger"),
    ///     Some("console"),
    ///     None,
    ///     Some("1.0"),
    /// );
    /// assert_eq!(descriptor.to_string(), "billing:logger:console:*:1.0");
    /// ```
    pub fn new(
        group: Option<&str>,
        type_: Option<&str>,
        kind: Option<&str>,
        name: Option<&str>,
        version: Option<&str>,
    ) -> Self {
        Self {
            group: field(group),
            type_: field(type_),
            kind: field(kind),
            name: field(name),
            version: field(version),
        }
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Field-wise match where wildcards on either side match anything
    pub fn matches(&self, other: &Descriptor) -> bool {
        match_field(&self.group, &other.group)
            && match_field(&self.type_, &other.type_)
            && match_field(&self.kind, &other.kind)
            && match_field(&self.name, &other.name)
            && match_field(&self.version, &other.version)
    }

    /// Field-wise equality, wildcards only match wildcards
    pub fn exact_match(&self, other: &Descriptor) -> bool {
        self == other
    }

    /// No field is a wildcard
    pub fn is_complete(&self) -> bool {
        self.group.is_some()
            && self.type_.is_some()
            && self.kind.is_some()
            && self.name.is_some()
            && self.version.is_some()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [&self.group, &self.type_, &self.kind, &self.name, &self.version];
        for (index, value) in fields.into_iter().enumerate() {
            if index > 0 {
                f.write_str(":")?;
            }
            f.write_str(value.as_deref().unwrap_or(WILDCARD))?;
        }
        Ok(())
    }
}

impl FromStr for Descriptor {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(':').collect();
        if tokens.len() != 5 {
            let message = format!("Descriptor {s} is in wrong format");
            return Err(
                ApplicationError::config(None, Some("BAD_DESCRIPTOR"), Some(&message))
                    .with_details("descriptor", s),
            );
        }
        Ok(Self::new(
            Some(tokens[0].trim()),
            Some(tokens[1].trim()),
            Some(tokens[2].trim()),
            Some(tokens[3].trim()),
            Some(tokens[4].trim()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::category::ErrorCategory;

    #[test]
    fn test_match() {
        let descriptor = Descriptor::new(
            Some("demo"),
            Some("controller"),
            Some("default"),
            Some("default"),
            Some("1.0"),
        );

        let other = Descriptor::new(Some("demo"), Some("controller"), None, None, None);
        assert!(descriptor.matches(&other));
        assert!(other.matches(&descriptor));

        let other = Descriptor::new(None, None, Some("default"), None, Some("1.0"));
        assert!(descriptor.matches(&other));

        let other = Descriptor::new(None, Some("persistence"), None, None, None);
        assert!(!descriptor.matches(&other));

        assert!(!descriptor.exact_match(&Descriptor::default()));
        assert!(descriptor.exact_match(&descriptor.clone()));
    }

    #[test]
    fn test_to_string_and_parse() {
        let descriptor: Descriptor = "demo:controller:*:*:1.0".parse().unwrap();
        assert_eq!(descriptor.group(), Some("demo"));
        assert_eq!(descriptor.kind(), None);
        assert_eq!(descriptor.version(), Some("1.0"));
        assert!(!descriptor.is_complete());
        assert_eq!(descriptor.to_string(), "demo:controller:*:*:1.0");
    }

    #[test]
    fn test_parse_wrong_format() {
        let err = "group:type".parse::<Descriptor>().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Misconfiguration);
        assert_eq!(err.code(), "BAD_DESCRIPTOR");
        assert_eq!(err.details()["descriptor"], "group:type");
    }
}
