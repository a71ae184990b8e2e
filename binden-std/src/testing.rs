//! Testing utilities for Binden.
//!
//! This module provides utilities to make testing binders, containers,
//! and dispatchers easier.
//!
//! # Features
//!
//! - [`RecordingLogger`]: captures binder warnings for assertions
//! - [`CountingContainer`]: wraps a container and counts resolutions
//! - [`RecordingListener`]: records the names of events it sees

use binden_core::{
    BindLogger, DispatcherRef, ResolutionError, ServiceContainer, ServiceId, SharedListener,
    listener,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Recording Logger
// ============================================================================

/// A logger that captures every warning it receives.
///
/// # Example
///
/// ```rust,ignore
/// let logger = RecordingLogger::new();
/// let binder = binder.with_logger(Arc::new(logger.clone()));
/// binder.initialize_models();
/// assert_eq!(logger.count(), 1);
/// ```
pub struct RecordingLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    /// Create an empty recording logger.
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Get the number of recorded messages.
    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Clear all recorded messages.
    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl Default for RecordingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingLogger {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
        }
    }
}

impl BindLogger for RecordingLogger {
    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// ============================================================================
// Counting Container
// ============================================================================

/// A container wrapper that counts resolve calls.
///
/// Useful for verifying laziness: a proxy that was never used must leave
/// the count at zero, and repeated use must not grow it past one.
pub struct CountingContainer {
    inner: Arc<dyn ServiceContainer>,
    resolutions: Arc<AtomicUsize>,
}

impl CountingContainer {
    /// Wrap a container.
    pub fn new(inner: Arc<dyn ServiceContainer>) -> Self {
        Self {
            inner,
            resolutions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `resolve` has been called.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

impl Clone for CountingContainer {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            resolutions: self.resolutions.clone(),
        }
    }
}

impl ServiceContainer for CountingContainer {
    fn resolve(&self, id: &ServiceId) -> Result<DispatcherRef, ResolutionError> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(id)
    }
}

// ============================================================================
// Recording Listener
// ============================================================================

/// Records the names of every event it is invoked with.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingListener::new();
/// dispatcher.add_listener("e", recorder.as_listener(), 0)?;
/// dispatcher.dispatch(Event::new("e"))?;
/// assert_eq!(recorder.names(), vec!["e"]);
/// ```
pub struct RecordingListener {
    names: Arc<Mutex<Vec<String>>>,
}

impl RecordingListener {
    /// Create an empty recording listener.
    pub fn new() -> Self {
        Self {
            names: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A [`SharedListener`] that records into this recorder.
    pub fn as_listener(&self) -> SharedListener {
        let names = self.names.clone();
        listener(move |event| {
            names.lock().unwrap().push(event.name().to_string());
            Ok(())
        })
    }

    /// Get a clone of the recorded event names.
    pub fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.names.lock().unwrap().len()
    }
}

impl Default for RecordingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingListener {
    fn clone(&self) -> Self {
        Self {
            names: self.names.clone(),
        }
    }
}
