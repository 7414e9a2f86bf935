//! Capability traits for components with dependencies

use super::references::References;
use crate::error::application_error::CommonsResult;

/// Component that depends on other components
///
/// Implementations look up collaborators by locator and return the
/// reference error produced by
/// [`References::get_one_required`] when a required one is missing.
///
/// ## Examples
/// ```rust
/// use std::sync::Arc;
/// use commons::error::application_error::CommonsResult;
/// use commons::refer::{locator::Locator, references::References, referenceable::Referenceable};
///
/// struct Persistence;
///
/// #[derive(Default)]
/// struct Controller {
///     persistence: Option<Arc<Persistence>>,
/// }
///
/// impl Referenceable for Controller {
///     fn set_references(&mut self, references: &References) -> CommonsResult<()> {
///         self.persistence = Some(references.get_one_required(&Locator::from("persistence"))?);
///         Ok(())
///     }
/// }
///
/// let mut controller = Controller::default();
/// assert!(controller.set_references(&References::new()).is_err());
/// ```
pub trait Referenceable {
    /// Sets references to dependent components
    fn set_references(&mut self, references: &References) -> CommonsResult<()>;
}

/// Component that must be told explicitly to drop its references
pub trait Unreferenceable {
    /// Releases references set by [`Referenceable::set_references`]
    fn unset_references(&mut self);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::refer::descriptor::Descriptor;
    use crate::refer::locator::Locator;

    struct Counter;

    #[derive(Default)]
    struct Service {
        counter: Option<Arc<Counter>>,
    }

    impl Referenceable for Service {
        fn set_references(&mut self, references: &References) -> CommonsResult<()> {
            let locator = Descriptor::new(Some("demo"), Some("counter"), None, None, None).into();
            self.counter = Some(references.get_one_required(&locator)?);
            Ok(())
        }
    }

    impl Unreferenceable for Service {
        fn unset_references(&mut self) {
            self.counter = None;
        }
    }

    #[test]
    fn test_set_and_unset_references() {
        let mut references = References::new();
        references.put(
            Locator::from(Descriptor::new(
                Some("demo"),
                Some("counter"),
                Some("memory"),
                Some("default"),
                Some("1.0"),
            )),
            Arc::new(Counter),
        );

        let mut service = Service::default();
        service.set_references(&references).unwrap();
        assert!(service.counter.is_some());

        service.unset_references();
        assert!(service.counter.is_none());
    }

    #[test]
    fn test_missing_reference_fails() {
        let mut service = Service::default();
        let err = service.set_references(&References::new()).unwrap_err();
        assert_eq!(err.code(), "REF_ERROR");
        assert_eq!(err.message(), "Cannot locate reference: demo:counter:*:*:*");
    }
}
