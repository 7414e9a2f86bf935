//! Component registry
//!
//! [`References`] keeps components in registration order. Lookups scan
//! from the most recent registration backwards, so a later `put` under an
//! equal locator shadows earlier ones for `get_one_*`.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::locator::Locator;
use crate::error::application_error::{ApplicationError, CommonsResult};

type Component = Arc<dyn Any + Send + Sync>;

/// Registry of components keyed by [`Locator`]
///
/// ## Examples
/// ```rust
/// use std::sync::Arc;
/// use commons::refer::{descriptor::Descriptor, locator::Locator, references::References};
///
/// struct Persistence;
///
/// let locator: Locator = Descriptor::new(
///     Some("demo"),
///     Some("persistence"),
///     Some("memory"),
///     Some("default"),
///     Some("1.0"),
/// )
/// .into();
/// let mut references = References::new();
/// references.put(locator, Arc::new(Persistence));
///
/// let query = Descriptor::new(Some("demo"), Some("persistence"), None, None, None).into();
/// assert!(references.get_one_required::<Persistence>(&query).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct References {
    entries: Vec<(Locator, Component)>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component under a locator
    pub fn put<T>(&mut self, locator: impl Into<Locator>, component: Arc<T>)
    where
        T: Any + Send + Sync,
    {
        let component: Component = component;
        self.entries.push((locator.into(), component));
    }

    /// Removes the most recent component registered under a matching locator
    pub fn remove(&mut self, locator: &Locator) -> Option<Arc<dyn Any + Send + Sync>> {
        let index = self
            .entries
            .iter()
            .rposition(|(registered, _)| registered.matches(locator))?;
        Some(self.entries.remove(index).1)
    }

    /// Removes every component registered under a matching locator
    pub fn remove_all(&mut self, locator: &Locator) -> Vec<Arc<dyn Any + Send + Sync>> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|(registered, _)| registered.matches(locator));
        self.entries = kept;
        removed.into_iter().map(|(_, component)| component).collect()
    }

    /// Locators of all registered components in registration order
    pub fn get_all_locators(&self) -> Vec<Locator> {
        self.entries.iter().map(|(locator, _)| locator.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find<T>(&self, locator: &Locator) -> impl Iterator<Item = Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.entries
            .iter()
            .rev()
            .filter(move |(registered, _)| registered.matches(locator))
            .filter_map(|(_, component)| Arc::clone(component).downcast::<T>().ok())
    }

    /// All components of type `T` under a matching locator, most recent first
    pub fn get_optional<T>(&self, locator: &Locator) -> Vec<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.find(locator).collect()
    }

    /// Like [`get_optional`](Self::get_optional) but fails when nothing matches
    pub fn get_required<T>(&self, locator: &Locator) -> CommonsResult<Vec<Arc<T>>>
    where
        T: Any + Send + Sync,
    {
        let components = self.get_optional(locator);
        if components.is_empty() {
            tracing::debug!(locator = %locator, "Required references are missing");
            return Err(ApplicationError::reference(None, Some(locator)));
        }
        Ok(components)
    }

    /// Most recently registered component of type `T` under a matching locator
    pub fn get_one_optional<T>(&self, locator: &Locator) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.find(locator).next()
    }

    /// Like [`get_one_optional`](Self::get_one_optional) but fails with a
    /// reference error when nothing matches
    pub fn get_one_required<T>(&self, locator: &Locator) -> CommonsResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.get_one_optional(locator).ok_or_else(|| {
            tracing::debug!(locator = %locator, "Required reference is missing");
            ApplicationError::reference(None, Some(locator))
        })
    }
}

impl fmt::Debug for References {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("References")
            .field("locators", &self.get_all_locators())
            .finish()
    }
}
