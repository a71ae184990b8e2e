//! No-op dispatcher.

use binden_core::{
    DispatchError, Event, EventDispatcher, EventSubscriber, ListenerId, RegisteredListener,
    SharedListener,
};
use std::sync::Arc;

/// A dispatcher that does nothing.
///
/// Installed by `ModelBinder::uninitialize_models` so that an unbound
/// model slot still holds an explicit dispatcher rather than nothing.
/// `dispatch` returns the event untouched, registrations are discarded
/// (the returned token is [`ListenerId::INERT`]), and the listener list
/// is always empty. No operation ever fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDispatcher;

impl EventDispatcher for NullDispatcher {
    fn dispatch(&self, event: Event) -> Result<Event, DispatchError> {
        Ok(event)
    }

    fn add_listener(
        &self,
        _event_name: &str,
        _listener: SharedListener,
        _priority: i32,
    ) -> Result<ListenerId, DispatchError> {
        Ok(ListenerId::INERT)
    }

    fn remove_listener(&self, _event_name: &str, _id: ListenerId) -> Result<bool, DispatchError> {
        Ok(false)
    }

    fn add_subscriber(&self, _subscriber: Arc<dyn EventSubscriber>) -> Result<(), DispatchError> {
        Ok(())
    }

    fn remove_subscriber(
        &self,
        _subscriber: &Arc<dyn EventSubscriber>,
    ) -> Result<(), DispatchError> {
        Ok(())
    }

    fn listeners(&self, _event_name: &str) -> Result<Vec<RegisteredListener>, DispatchError> {
        Ok(Vec::new())
    }

    fn has_listeners(&self, _event_name: &str) -> Result<bool, DispatchError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binden_core::listener;

    #[test]
    fn test_listener_list_stays_empty() {
        let dispatcher = NullDispatcher;
        let id = dispatcher
            .add_listener("e", listener(|_| Ok(())), 0)
            .unwrap();

        assert_eq!(id, ListenerId::INERT);
        assert!(dispatcher.listeners("e").unwrap().is_empty());
        assert!(!dispatcher.has_listeners("e").unwrap());
    }

    #[test]
    fn test_dispatch_is_a_no_op() {
        let dispatcher = NullDispatcher;
        let event = dispatcher
            .dispatch(Event::with_payload("e", 1u8))
            .unwrap();
        assert_eq!(event.payload::<u8>(), Some(&1));
        assert!(!event.is_propagation_stopped());
    }
}
