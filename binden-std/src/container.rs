//! Map-backed service container.

use binden_core::{DispatcherRef, ResolutionError, ServiceContainer, ServiceId};
use std::collections::HashMap;

/// A plain map of service identifiers to dispatchers.
///
/// The standard [`ServiceContainer`] implementation for hosts without a
/// dependency-injection framework of their own, and for tests.
///
/// # Example
/// ```rust,ignore
/// let container = ServiceMap::new()
///     .with_service("dispatcher.order", Arc::new(SimpleEventDispatcher::new()));
/// let dispatcher = container.resolve(&ServiceId::from("dispatcher.order"))?;
/// ```
#[derive(Default)]
pub struct ServiceMap {
    services: HashMap<ServiceId, DispatcherRef>,
}

impl ServiceMap {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    /// Register a dispatcher under an identifier, replacing any previous
    /// registration.
    pub fn provide(&mut self, id: impl Into<ServiceId>, dispatcher: DispatcherRef) {
        self.services.insert(id.into(), dispatcher);
    }

    /// Builder-style [`ServiceMap::provide`].
    pub fn with_service(mut self, id: impl Into<ServiceId>, dispatcher: DispatcherRef) -> Self {
        self.provide(id, dispatcher);
        self
    }

    /// Whether an identifier is registered.
    pub fn contains(&self, id: &ServiceId) -> bool {
        self.services.contains_key(id)
    }

    /// The number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the container is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceContainer for ServiceMap {
    fn resolve(&self, id: &ServiceId) -> Result<DispatcherRef, ResolutionError> {
        self.services
            .get(id)
            .cloned()
            .ok_or_else(|| ResolutionError::new(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::null::NullDispatcher;
    use std::sync::Arc;

    #[test]
    fn test_resolve_registered() {
        let container = ServiceMap::new().with_service("a", Arc::new(NullDispatcher));
        assert!(container.resolve(&ServiceId::from("a")).is_ok());
    }

    #[test]
    fn test_resolve_unregistered_names_the_id() {
        let container = ServiceMap::new();
        let err = container.resolve(&ServiceId::from("missing")).err().unwrap();
        assert_eq!(err.id.as_str(), "missing");
        assert!(err.to_string().contains("\"missing\""));
    }
}
