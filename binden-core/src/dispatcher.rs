//! Dispatcher core trait.
//!
//! [`EventDispatcher`] is the full capability set a dispatcher exposes:
//! dispatching named events, managing listeners by token, and managing
//! subscribers. The trait is object-safe so dispatchers can live behind
//! `Arc<dyn EventDispatcher>` in registries and containers.

use crate::error::{BoxError, DispatchError};
use crate::event::Event;
use crate::subscriber::EventSubscriber;
use std::fmt;
use std::sync::Arc;

/// A shared, callable listener.
///
/// Listeners receive the event mutably so they can alter the payload or
/// stop propagation, and report failures as [`BoxError`].
pub type SharedListener = Arc<dyn Fn(&mut Event) -> Result<(), BoxError> + Send + Sync>;

/// Wraps a closure as a [`SharedListener`].
pub fn listener<F>(f: F) -> SharedListener
where
    F: Fn(&mut Event) -> Result<(), BoxError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Token identifying a registered listener within one dispatcher.
///
/// Returned by [`EventDispatcher::add_listener`] and consumed by
/// [`EventDispatcher::remove_listener`]. Tokens are meaningful only for
/// the dispatcher that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Token issued by dispatchers that discard registrations
    /// (see `NullDispatcher` in `binden-std`). Inert on removal.
    pub const INERT: ListenerId = ListenerId(0);

    /// Create a token from a raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw token value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A listener registration as reported by [`EventDispatcher::listeners`]:
/// the issued token, the registration priority, and the listener itself.
#[derive(Clone)]
pub struct RegisteredListener {
    id: ListenerId,
    priority: i32,
    listener: SharedListener,
}

impl RegisteredListener {
    /// Create a registration entry.
    pub fn new(id: ListenerId, priority: i32, listener: SharedListener) -> Self {
        Self {
            id,
            priority,
            listener,
        }
    }

    /// The token issued for this registration.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// The registration priority. Higher priorities run first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The registered listener.
    pub fn listener(&self) -> &SharedListener {
        &self.listener
    }

    /// Invoke the listener on an event.
    pub fn call(&self, event: &mut Event) -> Result<(), BoxError> {
        (self.listener)(event)
    }
}

impl fmt::Debug for RegisteredListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredListener")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish()
    }
}

/// The event-dispatcher capability set.
///
/// Every operation returns `Result` because a lazily-resolved dispatcher
/// may fail with [`DispatchError::Resolution`] on the first call of any
/// kind; eagerly-constructed dispatchers simply never take that path.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `EventDispatcher`",
    label = "missing `EventDispatcher` implementation",
    note = "Implement the seven dispatcher operations, or wrap an existing dispatcher."
)]
pub trait EventDispatcher: Send + Sync {
    /// Dispatch an event to the listeners registered for its name, in
    /// priority order, honoring propagation stops. Returns the event,
    /// reflecting any listener mutations.
    fn dispatch(&self, event: Event) -> Result<Event, DispatchError>;

    /// Register a listener for an event name. Higher priorities run
    /// first; listeners of equal priority run in registration order.
    fn add_listener(
        &self,
        event_name: &str,
        listener: SharedListener,
        priority: i32,
    ) -> Result<ListenerId, DispatchError>;

    /// Remove a listener by its token. Returns `true` if a listener was
    /// removed.
    fn remove_listener(&self, event_name: &str, id: ListenerId) -> Result<bool, DispatchError>;

    /// Register every subscription a subscriber declares.
    fn add_subscriber(&self, subscriber: Arc<dyn EventSubscriber>) -> Result<(), DispatchError>;

    /// Remove everything a subscriber registered, matched by `Arc`
    /// identity.
    fn remove_subscriber(&self, subscriber: &Arc<dyn EventSubscriber>)
    -> Result<(), DispatchError>;

    /// The listeners registered for an event name, in dispatch order.
    fn listeners(&self, event_name: &str) -> Result<Vec<RegisteredListener>, DispatchError>;

    /// Whether any listener is registered for an event name.
    fn has_listeners(&self, event_name: &str) -> Result<bool, DispatchError>;
}
