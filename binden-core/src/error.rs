//! Error types for Binden.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`BindenError`] - Top-level error type for all Binden operations
//! - [`DispatchError`] - Errors during event dispatch
//! - [`ResolutionError`] - A container could not resolve a service identifier

use crate::container::ServiceId;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Binden operations.
#[derive(Error, Debug)]
pub enum BindenError {
    /// An error occurred during event dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A service identifier could not be resolved.
    #[error("resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// A container could not resolve the requested service identifier.
///
/// When this surfaces out of a lazy proxy operation it means the proxy was
/// bound to an identifier that was never registered. The failure is
/// deliberately deferred to first use, not bind time.
#[derive(Error, Debug)]
#[error("no dispatcher service registered for id \"{id}\"")]
pub struct ResolutionError {
    /// The identifier that failed to resolve.
    pub id: ServiceId,
}

impl ResolutionError {
    /// Create a resolution error for the given identifier.
    pub fn new(id: ServiceId) -> Self {
        Self { id }
    }
}

/// Errors that can occur during event dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A listener failed while handling an event.
    #[error("listener error")]
    Listener(#[source] BoxError),

    /// The dispatcher could not be resolved from its container.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

// Convenience conversions
impl From<BoxError> for BindenError {
    fn from(err: BoxError) -> Self {
        BindenError::Custom(err)
    }
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Listener(err)
    }
}
