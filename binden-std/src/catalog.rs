//! Model class catalog.
//!
//! An explicit registration list standing in for runtime class
//! reflection: generated model code (or the host's wiring) registers the
//! class paths it produced, and the binder asks the catalog its
//! eligibility questions through [`ModelLookup`]. With the `inventory`
//! feature the list can be collected at link time from registrations
//! emitted by `#[derive(DispatcherAware)]` and [`register_model_class!`].
//!
//! [`register_model_class!`]: crate::register_model_class

use binden_core::ModelLookup;
use std::collections::HashMap;

/// A single known model class.
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
    /// Fully-qualified class path.
    pub class: String,
    /// Whether the class carries the dispatcher-aware capability.
    pub dispatcher_aware: bool,
}

impl ModelDescriptor {
    /// Describe a class.
    pub fn new(class: impl Into<String>, dispatcher_aware: bool) -> Self {
        Self {
            class: class.into(),
            dispatcher_aware,
        }
    }
}

/// A link-time model registration.
///
/// Submitted via `inventory` by `#[derive(DispatcherAware)]` (aware) and
/// [`register_model_class!`] (not aware, e.g. generated base classes);
/// collected by [`ModelCatalog::discover`].
///
/// [`register_model_class!`]: crate::register_model_class
#[cfg(feature = "inventory")]
pub struct ModelRegistration {
    /// Fully-qualified class path.
    pub class: &'static str,
    /// Whether the class carries the dispatcher-aware capability.
    pub dispatcher_aware: bool,
}

#[cfg(feature = "inventory")]
inventory::collect!(ModelRegistration);

/// The set of known model classes.
///
/// Implements [`ModelLookup`] for the binder. Registering a class twice
/// never downgrades it: once marked dispatcher-aware, it stays aware.
#[derive(Debug, Default)]
pub struct ModelCatalog {
    classes: HashMap<String, bool>,
}

impl ModelCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Register a described class.
    pub fn register(&mut self, descriptor: ModelDescriptor) {
        let aware = self.classes.entry(descriptor.class).or_insert(false);
        *aware = *aware || descriptor.dispatcher_aware;
    }

    /// Register a class that exists but is not dispatcher-aware (for
    /// example a generated base class).
    pub fn register_class(&mut self, class: impl Into<String>) {
        self.register(ModelDescriptor::new(class, false));
    }

    /// Register a dispatcher-aware class.
    pub fn register_aware(&mut self, class: impl Into<String>) {
        self.register(ModelDescriptor::new(class, true));
    }

    /// The number of known classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Build a catalog from every [`ModelRegistration`] linked into the
    /// binary.
    #[cfg(feature = "inventory")]
    pub fn discover() -> Self {
        let mut catalog = Self::new();
        for registration in inventory::iter::<ModelRegistration> {
            catalog.register(ModelDescriptor::new(
                registration.class,
                registration.dispatcher_aware,
            ));
        }
        catalog
    }
}

impl ModelLookup for ModelCatalog {
    fn class_exists(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    fn is_dispatcher_aware(&self, class: &str) -> bool {
        self.classes.get(class).copied().unwrap_or(false)
    }
}

/// Register a model class that exists but is not dispatcher-aware, such
/// as a generated base class.
///
/// ```rust,ignore
/// binden_std::register_model_class!("app::model::base::Customer");
/// ```
#[cfg(feature = "inventory")]
#[macro_export]
macro_rules! register_model_class {
    ($class:expr) => {
        $crate::inventory::submit! {
            $crate::ModelRegistration {
                class: $class,
                dispatcher_aware: false,
            }
        }
    };
}
