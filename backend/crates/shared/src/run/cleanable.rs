//! Components with resettable state

use crate::error::application_error::CommonsResult;

/// Component that can reset its state to the fresh-construction baseline
///
/// Mostly used between tests, occasionally in production.
pub trait Cleanable {
    /// Clears component state
    fn clear(&mut self, correlation_id: Option<&str>) -> CommonsResult<()>;
}

/// Clears groups of components
pub struct Cleaner;

impl Cleaner {
    /// Clears each component in order, stopping at the first failure
    pub fn clear<'a, I>(correlation_id: Option<&str>, components: I) -> CommonsResult<()>
    where
        I: IntoIterator<Item = &'a mut dyn Cleanable>,
    {
        for (index, component) in components.into_iter().enumerate() {
            if let Err(e) = component.clear(correlation_id) {
                tracing::error!(
                    correlation_id = correlation_id.unwrap_or_default(),
                    component = index,
                    error = %e,
                    "Failed to clear component"
                );
                return Err(e);
            }
        }
        tracing::debug!(
            correlation_id = correlation_id.unwrap_or_default(),
            "Components cleared"
        );
        Ok(())
    }
}
