//! # binden-std
//!
//! Standard implementations for the Binden dispatcher binding library.
//!
//! `binden-core` defines the capabilities; this crate ships the pieces a
//! host actually wires together at bootstrap:
//!
//! - [`SimpleEventDispatcher`] - name-keyed, priority-ordered dispatcher
//! - [`NullDispatcher`] - explicit no-op dispatcher
//! - [`LazyDispatcher`] - proxy resolving its delegate from a container
//!   on first use
//! - [`ServiceMap`] - map-backed service container
//! - [`DispatcherRegistry`] - per-class dispatcher slots
//! - [`ModelCatalog`] - registration list answering the binder's
//!   eligibility questions
//! - [`ModelBinder`] - installs dispatchers onto eligible model classes
//! - [`NullLogger`] / [`TracingLogger`] - binder warning sinks
//!
//! Enable the `inventory` feature to collect model registrations at link
//! time via [`ModelCatalog::discover`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod binder;
mod catalog;
mod container;
mod dispatcher;
mod lazy;
mod logger;
mod null;
mod registry;

pub mod testing;

// Re-exports
pub use binder::{BindMode, ModelBinder, ModelBinding, base_class_of};
pub use catalog::{ModelCatalog, ModelDescriptor};
pub use container::ServiceMap;
pub use dispatcher::SimpleEventDispatcher;
pub use lazy::LazyDispatcher;
pub use logger::{NullLogger, TracingLogger};
pub use null::NullDispatcher;
pub use registry::DispatcherRegistry;

#[cfg(feature = "inventory")]
pub use catalog::ModelRegistration;

// `register_model_class!` and derive expansions refer to the inventory
// machinery through this crate.
#[cfg(feature = "inventory")]
pub use inventory;
