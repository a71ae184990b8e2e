//! # binden-core
//!
//! Core capability traits for the Binden dispatcher binding library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! hosts and integrations that don't need the standard implementations in
//! `binden-std`.
//!
//! # Capability Model
//!
//! Binden wires an event-dispatcher capability onto generated model
//! classes. Everything it consumes or produces is expressed as one of
//! four small capabilities:
//!
//! ## Dispatcher ([`EventDispatcher`])
//!
//! The seven-operation capability set: dispatch a named [`Event`], manage
//! listeners by [`ListenerId`] token, manage [`EventSubscriber`] bundles,
//! and inspect registrations. Every operation returns `Result` because a
//! lazily-resolved dispatcher may fail on the first call of any kind.
//!
//! ## Container ([`ServiceContainer`])
//!
//! A single operation: resolve a [`ServiceId`] to a [`DispatcherRef`].
//! Failure is a [`ResolutionError`], surfaced to the caller of whichever
//! dispatcher operation triggered resolution.
//!
//! ## Lookup ([`ModelLookup`])
//!
//! Answers the binder's eligibility questions about generated model
//! classes: existence and the dispatcher-aware capability. Model types
//! declare the capability at compile time via [`DispatcherAware`].
//!
//! ## Logger ([`BindLogger`])
//!
//! A warning sink for binder skip paths. Optional by construction: a
//! discarding implementation satisfies the capability.
//!
//! # Error Types
//!
//! - [`BindenError`] - Top-level error type
//! - [`DispatchError`] - Dispatch-related errors
//! - [`ResolutionError`] - Container resolution failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod container;
mod dispatcher;
mod error;
mod event;
mod logger;
mod lookup;
mod subscriber;

// Re-exports
pub use container::{DispatcherRef, ServiceContainer, ServiceId};
pub use dispatcher::{
    EventDispatcher, ListenerId, RegisteredListener, SharedListener, listener,
};
pub use error::{BindenError, BoxError, DispatchError, ResolutionError};
pub use event::Event;
pub use logger::BindLogger;
pub use lookup::{DISPATCHER_AWARE, DispatcherAware, ModelLookup};
pub use subscriber::{EventSubscriber, Subscription};
