//! Subscriber core trait.
//!
//! A subscriber bundles several listener registrations behind one object:
//! it declares which event names it wants (with priorities) and handles
//! all of them through a single entry point. Dispatchers register and
//! remove the whole bundle atomically.

use crate::error::BoxError;
use crate::event::Event;

/// One event name a subscriber wants to receive, with its priority.
#[derive(Debug, Clone)]
pub struct Subscription {
    /// The event name to listen for.
    pub event_name: String,
    /// Registration priority. Higher priorities run first.
    pub priority: i32,
}

impl Subscription {
    /// Subscribe to an event name at the default priority.
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            priority: 0,
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// An object subscribing to a set of named events.
pub trait EventSubscriber: Send + Sync {
    /// The subscriptions this subscriber wants registered.
    fn subscriptions(&self) -> Vec<Subscription>;

    /// Handle an event for any of the declared subscriptions.
    fn on_event(&self, event: &mut Event) -> Result<(), BoxError>;
}
