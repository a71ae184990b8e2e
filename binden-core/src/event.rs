//! # Named Event
//!
//! Provides [`Event`], the unit of work flowing through a dispatcher: an
//! event name, an optional dynamically-typed payload, and a propagation
//! flag that listeners can raise to skip the rest of the chain.

use std::any::Any;
use std::fmt;

/// A named event with an optional dynamic payload.
///
/// Dispatchers are string-keyed: listeners are registered for an event
/// name, and dispatching an `Event` runs the listeners registered for
/// [`Event::name`]. The payload is opaque to the dispatcher; listeners
/// downcast it with [`Event::payload`] / [`Event::payload_mut`].
///
/// # Example
///
/// ```rust,ignore
/// let mut event = Event::with_payload("order.created", 42u32);
/// assert_eq!(event.payload::<u32>(), Some(&42));
/// event.stop_propagation();
/// assert!(event.is_propagation_stopped());
/// ```
pub struct Event {
    name: String,
    payload: Option<Box<dyn Any + Send + Sync>>,
    propagation_stopped: bool,
}

impl Event {
    /// Create an event with no payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
            propagation_stopped: false,
        }
    }

    /// Create an event carrying a payload.
    pub fn with_payload<P: Any + Send + Sync>(name: impl Into<String>, payload: P) -> Self {
        let mut event = Self::new(name);
        event.set_payload(payload);
        event
    }

    /// The event name listeners are keyed by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the payload, if present and of type `P`.
    pub fn payload<P: Any>(&self) -> Option<&P> {
        self.payload.as_deref().and_then(|p| p.downcast_ref())
    }

    /// Mutably borrow the payload, if present and of type `P`.
    pub fn payload_mut<P: Any>(&mut self) -> Option<&mut P> {
        self.payload.as_deref_mut().and_then(|p| p.downcast_mut())
    }

    /// Replace the payload.
    pub fn set_payload<P: Any + Send + Sync>(&mut self, payload: P) {
        self.payload = Some(Box::new(payload));
    }

    /// Take the payload out of the event, if present and of type `P`.
    pub fn take_payload<P: Any>(&mut self) -> Option<P> {
        match self.payload.take() {
            Some(boxed) => match boxed.downcast::<P>() {
                Ok(payload) => Some(*payload),
                Err(other) => {
                    // Wrong type requested: put it back untouched.
                    self.payload = Some(other);
                    None
                }
            },
            None => None,
        }
    }

    /// Whether the event carries a payload.
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Prevent any further listeners from seeing this event.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether a listener has stopped propagation.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("has_payload", &self.payload.is_some())
            .field("propagation_stopped", &self.propagation_stopped)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_roundtrip() {
        let mut event = Event::with_payload("test", String::from("hello"));
        assert_eq!(event.payload::<String>().map(String::as_str), Some("hello"));

        event.payload_mut::<String>().unwrap().push_str(" world");
        assert_eq!(event.take_payload::<String>().as_deref(), Some("hello world"));
        assert!(!event.has_payload());
    }

    #[test]
    fn test_payload_wrong_type() {
        let mut event = Event::with_payload("test", 7u32);
        assert!(event.payload::<String>().is_none());
        // A mistyped take must not destroy the payload.
        assert!(event.take_payload::<String>().is_none());
        assert_eq!(event.payload::<u32>(), Some(&7));
    }

    #[test]
    fn test_stop_propagation() {
        let mut event = Event::new("test");
        assert!(!event.is_propagation_stopped());
        event.stop_propagation();
        assert!(event.is_propagation_stopped());
    }
}
