//! In-process event dispatcher.

use binden_core::{
    DispatchError, Event, EventDispatcher, EventSubscriber, ListenerId, RegisteredListener,
    SharedListener,
};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Everything one subscriber registered, for symmetric removal.
struct SubscriberEntry {
    subscriber: Arc<dyn EventSubscriber>,
    registrations: Vec<(String, ListenerId)>,
}

/// A name-keyed, priority-ordered event dispatcher.
///
/// Listeners are kept per event name, sorted by descending priority with
/// registration order breaking ties. Dispatch runs against a snapshot of
/// the listener list, so listeners may register or remove listeners on
/// the same dispatcher without deadlocking; such changes take effect from
/// the next dispatch.
///
/// All state is behind locks, so the dispatcher is usable as
/// `Arc<dyn EventDispatcher>` shared across a registry and a container.
pub struct SimpleEventDispatcher {
    listeners: RwLock<HashMap<String, Vec<RegisteredListener>>>,
    subscribers: Mutex<Vec<SubscriberEntry>>,
    next_id: AtomicU64,
}

impl SimpleEventDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
            subscribers: Mutex::new(Vec::new()),
            // 0 is reserved for ListenerId::INERT.
            next_id: AtomicU64::new(1),
        }
    }

    fn allocate_id(&self) -> ListenerId {
        ListenerId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn insert(&self, event_name: &str, listener: SharedListener, priority: i32) -> ListenerId {
        let id = self.allocate_id();
        let mut table = self.listeners.write().unwrap();
        let entries = table.entry(event_name.to_string()).or_default();
        entries.push(RegisteredListener::new(id, priority, listener));
        // Ids are monotonic, so sorting on (priority desc, id asc) keeps
        // registration order within a priority.
        entries.sort_by_key(|e| (Reverse(e.priority()), e.id()));
        id
    }

    fn remove(&self, event_name: &str, id: ListenerId) -> bool {
        let mut table = self.listeners.write().unwrap();
        let (removed, now_empty) = match table.get_mut(event_name) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| e.id() != id);
                (entries.len() != before, entries.is_empty())
            }
            None => (false, false),
        };
        if now_empty {
            table.remove(event_name);
        }
        removed
    }
}

impl Default for SimpleEventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher for SimpleEventDispatcher {
    fn dispatch(&self, mut event: Event) -> Result<Event, DispatchError> {
        let snapshot: Vec<RegisteredListener> = {
            let table = self.listeners.read().unwrap();
            table.get(event.name()).cloned().unwrap_or_default()
        };
        for entry in snapshot {
            if event.is_propagation_stopped() {
                break;
            }
            entry.call(&mut event).map_err(DispatchError::Listener)?;
        }
        Ok(event)
    }

    fn add_listener(
        &self,
        event_name: &str,
        listener: SharedListener,
        priority: i32,
    ) -> Result<ListenerId, DispatchError> {
        Ok(self.insert(event_name, listener, priority))
    }

    fn remove_listener(&self, event_name: &str, id: ListenerId) -> Result<bool, DispatchError> {
        Ok(self.remove(event_name, id))
    }

    fn add_subscriber(&self, subscriber: Arc<dyn EventSubscriber>) -> Result<(), DispatchError> {
        let mut registrations = Vec::new();
        for subscription in subscriber.subscriptions() {
            let target = subscriber.clone();
            let listener: SharedListener = Arc::new(move |event: &mut Event| target.on_event(event));
            let id = self.insert(&subscription.event_name, listener, subscription.priority);
            registrations.push((subscription.event_name, id));
        }
        self.subscribers.lock().unwrap().push(SubscriberEntry {
            subscriber,
            registrations,
        });
        Ok(())
    }

    fn remove_subscriber(
        &self,
        subscriber: &Arc<dyn EventSubscriber>,
    ) -> Result<(), DispatchError> {
        let entry = {
            let mut subscribers = self.subscribers.lock().unwrap();
            subscribers
                .iter()
                .position(|e| Arc::ptr_eq(&e.subscriber, subscriber))
                .map(|index| subscribers.remove(index))
        };
        if let Some(entry) = entry {
            for (event_name, id) in entry.registrations {
                self.remove(&event_name, id);
            }
        }
        Ok(())
    }

    fn listeners(&self, event_name: &str) -> Result<Vec<RegisteredListener>, DispatchError> {
        Ok(self
            .listeners
            .read()
            .unwrap()
            .get(event_name)
            .cloned()
            .unwrap_or_default())
    }

    fn has_listeners(&self, event_name: &str) -> Result<bool, DispatchError> {
        Ok(self
            .listeners
            .read()
            .unwrap()
            .get(event_name)
            .is_some_and(|entries| !entries.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binden_core::{BoxError, Subscription, listener};

    fn recording_listener(tag: &str, order: &Arc<Mutex<Vec<String>>>) -> SharedListener {
        let tag = tag.to_string();
        let order = order.clone();
        listener(move |_event| {
            order.lock().unwrap().push(tag.clone());
            Ok(())
        })
    }

    #[test]
    fn test_priority_ordering() {
        let dispatcher = SimpleEventDispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        dispatcher
            .add_listener("e", recording_listener("low", &order), -10)
            .unwrap();
        dispatcher
            .add_listener("e", recording_listener("first", &order), 0)
            .unwrap();
        dispatcher
            .add_listener("e", recording_listener("second", &order), 0)
            .unwrap();
        dispatcher
            .add_listener("e", recording_listener("high", &order), 10)
            .unwrap();

        dispatcher.dispatch(Event::new("e")).unwrap();

        assert_eq!(
            *order.lock().unwrap(),
            vec!["high", "first", "second", "low"],
            "Higher priority runs first; registration order breaks ties"
        );
    }

    #[test]
    fn test_stop_propagation() {
        let dispatcher = SimpleEventDispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let stopper = {
            let order = order.clone();
            listener(move |event: &mut Event| {
                order.lock().unwrap().push("stopper".to_string());
                event.stop_propagation();
                Ok(())
            })
        };
        dispatcher.add_listener("e", stopper, 10).unwrap();
        dispatcher
            .add_listener("e", recording_listener("skipped", &order), 0)
            .unwrap();

        let event = dispatcher.dispatch(Event::new("e")).unwrap();

        assert!(event.is_propagation_stopped());
        assert_eq!(*order.lock().unwrap(), vec!["stopper"]);
    }

    #[test]
    fn test_remove_listener_by_token() {
        let dispatcher = SimpleEventDispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let id = dispatcher
            .add_listener("e", recording_listener("gone", &order), 0)
            .unwrap();
        assert!(dispatcher.has_listeners("e").unwrap());

        assert!(dispatcher.remove_listener("e", id).unwrap());
        assert!(!dispatcher.has_listeners("e").unwrap());
        assert!(
            !dispatcher.remove_listener("e", id).unwrap(),
            "Removing twice reports false"
        );

        dispatcher.dispatch(Event::new("e")).unwrap();
        assert!(order.lock().unwrap().is_empty());
    }

    #[test]
    fn test_listener_error_surfaces() {
        let dispatcher = SimpleEventDispatcher::new();
        dispatcher
            .add_listener("e", listener(|_| Err(BoxError::from("boom"))), 0)
            .unwrap();

        let result = dispatcher.dispatch(Event::new("e"));
        assert!(matches!(result, Err(DispatchError::Listener(_))));
    }

    struct TwoEventSubscriber {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl EventSubscriber for TwoEventSubscriber {
        fn subscriptions(&self) -> Vec<Subscription> {
            vec![
                Subscription::new("a"),
                Subscription::new("b").with_priority(5),
            ]
        }

        fn on_event(&self, event: &mut Event) -> Result<(), BoxError> {
            self.seen.lock().unwrap().push(event.name().to_string());
            Ok(())
        }
    }

    #[test]
    fn test_subscriber_add_remove_symmetry() {
        let dispatcher = SimpleEventDispatcher::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber: Arc<dyn EventSubscriber> =
            Arc::new(TwoEventSubscriber { seen: seen.clone() });

        dispatcher.add_subscriber(subscriber.clone()).unwrap();
        assert!(dispatcher.has_listeners("a").unwrap());
        assert!(dispatcher.has_listeners("b").unwrap());

        dispatcher.dispatch(Event::new("a")).unwrap();
        dispatcher.dispatch(Event::new("b")).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);

        dispatcher.remove_subscriber(&subscriber).unwrap();
        assert!(!dispatcher.has_listeners("a").unwrap());
        assert!(!dispatcher.has_listeners("b").unwrap());
    }
}
