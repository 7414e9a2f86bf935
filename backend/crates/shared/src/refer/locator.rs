//! Reference locators

use std::fmt;

use super::descriptor::Descriptor;

/// Key used to find a dependency in a [`References`](super::references::References) registry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Plain name, matched by equality
    Name(String),
    /// Descriptor, matched with wildcards
    Descriptor(Descriptor),
}

impl Locator {
    /// Whether a component registered under `self` satisfies a lookup by `query`
    pub fn matches(&self, query: &Locator) -> bool {
        match (self, query) {
            (Locator::Descriptor(registered), Locator::Descriptor(query)) => {
                registered.matches(query)
            }
            (Locator::Name(registered), Locator::Name(query)) => registered == query,
            _ => false,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Name(name) => f.write_str(name),
            Locator::Descriptor(descriptor) => write!(f, "{descriptor}"),
        }
    }
}

impl From<&str> for Locator {
    fn from(name: &str) -> Self {
        Locator::Name(name.to_string())
    }
}

impl From<String> for Locator {
    fn from(name: String) -> Self {
        Locator::Name(name)
    }
}

impl From<Descriptor> for Locator {
    fn from(descriptor: Descriptor) -> Self {
        Locator::Descriptor(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_descriptor_do_not_match() {
        let name = Locator::from("a:b:c:d:1.0");
        let descriptor = Locator::from(Descriptor::new(None, None, None, None, None));
        assert!(!name.matches(&descriptor));
        assert!(!descriptor.matches(&name));
        assert!(name.matches(&Locator::from("a:b:c:d:1.0")));
    }

    #[test]
    fn test_display() {
        let locator = Locator::from(Descriptor::new(Some("g"), Some("t"), None, Some("n"), None));
        assert_eq!(locator.to_string(), "g:t:*:n:*");
    }
}
