//! Service container capability.
//!
//! Binden consumes a container only through [`ServiceContainer::resolve`]:
//! given an opaque [`ServiceId`], hand back a shared dispatcher or fail
//! with [`ResolutionError`]. Container semantics (scopes, lifecycles,
//! wiring) are the host's business.

use crate::dispatcher::EventDispatcher;
use crate::error::ResolutionError;
use std::fmt;
use std::sync::Arc;

/// A shared reference to a dispatcher.
pub type DispatcherRef = Arc<dyn EventDispatcher>;

/// Opaque key naming a dispatcher service inside a container.
///
/// Immutable once assigned to a proxy or binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(String);

impl ServiceId {
    /// Create a service identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A container capable of resolving a dispatcher by identifier.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve dispatcher services",
    label = "missing `ServiceContainer` implementation",
    note = "Implement `resolve`, or use `ServiceMap` from `binden-std`."
)]
pub trait ServiceContainer: Send + Sync {
    /// Resolve the dispatcher registered under `id`.
    ///
    /// Fails with [`ResolutionError`] if the identifier is unregistered.
    fn resolve(&self, id: &ServiceId) -> Result<DispatcherRef, ResolutionError>;
}
