//! # binden - Dispatcher Binding for Generated Models
//!
//! `binden` wires an event-dispatcher capability onto ORM-style generated
//! model classes at application bootstrap. Dispatchers live in a service
//! container; model classes get a **lazy proxy** that only fetches the
//! real dispatcher from the container on first use, so binding can happen
//! while the container is still being assembled — and even before the
//! model classes themselves have been generated.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use binden::prelude::*;
//! use std::sync::Arc;
//!
//! // The container holds the real dispatchers.
//! let container: Arc<dyn ServiceContainer> = Arc::new(
//!     ServiceMap::new().with_service("dispatcher.customer", Arc::new(SimpleEventDispatcher::new())),
//! );
//!
//! // Generated code registered what exists and what is dispatcher-aware.
//! let mut catalog = ModelCatalog::new();
//! catalog.register_class("app::model::base::Customer");
//! catalog.register_aware("app::model::Customer");
//!
//! // Bind: eligible classes get a lazy proxy in their registry slot.
//! let registry = Arc::new(DispatcherRegistry::new());
//! let binder = ModelBinder::new(
//!     container,
//!     Arc::new(catalog),
//!     registry.clone(),
//!     vec![ModelBinding::new("dispatcher.customer", "app::model::Customer")],
//! );
//! binder.initialize_models();
//!
//! let dispatcher = registry.get("app::model::Customer").unwrap();
//! dispatcher.dispatch(Event::new("customer.saved"))?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use binden_core::{
    // Logger capability
    BindLogger,
    // Error types
    BindenError,
    BoxError,
    DISPATCHER_AWARE,
    DispatchError,
    // Lookup capability
    DispatcherAware,
    DispatcherRef,
    // Event
    Event,
    // Dispatcher capability
    EventDispatcher,
    EventSubscriber,
    ListenerId,
    ModelLookup,
    RegisteredListener,
    ResolutionError,
    // Container capability
    ServiceContainer,
    ServiceId,
    SharedListener,
    Subscription,
    listener,
};

pub use binden_std::{
    // Binder
    BindMode,
    // Registry / catalog
    DispatcherRegistry,
    // Dispatchers
    LazyDispatcher,
    ModelBinder,
    ModelBinding,
    ModelCatalog,
    ModelDescriptor,
    NullDispatcher,
    // Logging
    NullLogger,
    // Container
    ServiceMap,
    SimpleEventDispatcher,
    TracingLogger,
    base_class_of,
};

#[cfg(feature = "inventory")]
pub use binden_std::{ModelRegistration, inventory, register_model_class};

#[cfg(feature = "macros")]
pub use binden_macros::DispatcherAware;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use binden_std::testing::*;
}

/// Prelude module - common imports for Binden.
///
/// # Usage
///
/// ```rust,ignore
/// use binden::prelude::*;
/// ```
pub mod prelude {
    pub use binden_core::{
        BindLogger, DispatcherAware, DispatcherRef, Event, EventDispatcher, EventSubscriber,
        ModelLookup, ServiceContainer, ServiceId, Subscription, listener,
    };
    pub use binden_std::{
        BindMode, DispatcherRegistry, LazyDispatcher, ModelBinder, ModelBinding, ModelCatalog,
        NullDispatcher, ServiceMap, SimpleEventDispatcher, TracingLogger,
    };

    #[cfg(feature = "macros")]
    pub use binden_macros::DispatcherAware;
}
