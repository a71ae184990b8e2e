//! # Lazy Dispatcher Proxy
//!
//! [`LazyDispatcher`] defers fetching a real dispatcher from its container
//! until the first operation of any kind, then caches the resolved
//! reference for the proxy's lifetime and forwards every call to it.
//!
//! Laziness exists for services that are heavyweight or circularly
//! dependent at wiring time: the proxy can be handed out while the
//! container is still being assembled. The price is that an unregistered
//! identifier is only detected at first use, where it surfaces as
//! [`DispatchError::Resolution`] out of whichever operation triggered it.
//! Hosts that want bind-time failure can call [`LazyDispatcher::resolve_now`].

use binden_core::{
    DispatchError, DispatcherRef, Event, EventDispatcher, EventSubscriber, ListenerId,
    RegisteredListener, ResolutionError, ServiceContainer, ServiceId, SharedListener,
};
use std::fmt;
use std::sync::{Arc, Mutex};

/// A dispatcher proxy that resolves its delegate on first use.
///
/// Indistinguishable from the resolved dispatcher to callers: every
/// operation forwards with its original arguments and returns the
/// delegate's result unchanged. The container is queried at most once on
/// the success path; which operation comes first never matters.
pub struct LazyDispatcher {
    container: Arc<dyn ServiceContainer>,
    id: ServiceId,
    resolved: Mutex<Option<DispatcherRef>>,
}

impl LazyDispatcher {
    /// Create a proxy for the dispatcher registered under `id`.
    ///
    /// The container is not queried here.
    pub fn new(container: Arc<dyn ServiceContainer>, id: ServiceId) -> Self {
        Self {
            container,
            id,
            resolved: Mutex::new(None),
        }
    }

    /// The identifier this proxy resolves.
    pub fn service_id(&self) -> &ServiceId {
        &self.id
    }

    /// Whether the delegate has been resolved yet.
    pub fn is_resolved(&self) -> bool {
        self.resolved.lock().unwrap().is_some()
    }

    /// Resolve the delegate eagerly.
    ///
    /// Useful for hosts that prefer failing at bind time over failing at
    /// first dispatch. Idempotent: once resolved, the cached delegate is
    /// returned without consulting the container.
    pub fn resolve_now(&self) -> Result<DispatcherRef, ResolutionError> {
        self.delegate()
    }

    fn delegate(&self) -> Result<DispatcherRef, ResolutionError> {
        let mut slot = self.resolved.lock().unwrap();
        if let Some(dispatcher) = slot.as_ref() {
            return Ok(dispatcher.clone());
        }
        let dispatcher = self.container.resolve(&self.id)?;
        *slot = Some(dispatcher.clone());
        Ok(dispatcher)
    }
}

impl fmt::Debug for LazyDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyDispatcher")
            .field("id", &self.id)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

impl EventDispatcher for LazyDispatcher {
    fn dispatch(&self, event: Event) -> Result<Event, DispatchError> {
        self.delegate()?.dispatch(event)
    }

    fn add_listener(
        &self,
        event_name: &str,
        listener: SharedListener,
        priority: i32,
    ) -> Result<ListenerId, DispatchError> {
        self.delegate()?.add_listener(event_name, listener, priority)
    }

    fn remove_listener(&self, event_name: &str, id: ListenerId) -> Result<bool, DispatchError> {
        self.delegate()?.remove_listener(event_name, id)
    }

    fn add_subscriber(&self, subscriber: Arc<dyn EventSubscriber>) -> Result<(), DispatchError> {
        self.delegate()?.add_subscriber(subscriber)
    }

    fn remove_subscriber(
        &self,
        subscriber: &Arc<dyn EventSubscriber>,
    ) -> Result<(), DispatchError> {
        self.delegate()?.remove_subscriber(subscriber)
    }

    fn listeners(&self, event_name: &str) -> Result<Vec<RegisteredListener>, DispatchError> {
        self.delegate()?.listeners(event_name)
    }

    fn has_listeners(&self, event_name: &str) -> Result<bool, DispatchError> {
        self.delegate()?.has_listeners(event_name)
    }
}
