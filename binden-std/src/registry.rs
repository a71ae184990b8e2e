//! Dispatcher slot registry.
//!
//! The original design for this kind of integration hangs a shared
//! dispatcher off each model class as class-level static state. Here the
//! slots are an explicit registry: one lock-guarded map from model class
//! path to dispatcher, created at startup and passed to whatever needs
//! it. Binding is an `install` into this map.

use binden_core::{DispatcherAware, DispatcherRef};
use std::collections::HashMap;
use std::sync::RwLock;

/// Shared dispatcher slots, keyed by fully-qualified model class path.
///
/// Thread-safe; intended to be created once at startup, populated by
/// `ModelBinder`, and shared behind `Arc` for the life of the process.
#[derive(Default)]
pub struct DispatcherRegistry {
    slots: RwLock<HashMap<String, DispatcherRef>>,
}

impl DispatcherRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Install a dispatcher into a class's slot, replacing any previous
    /// dispatcher.
    pub fn install(&self, class: impl Into<String>, dispatcher: DispatcherRef) {
        self.slots.write().unwrap().insert(class.into(), dispatcher);
    }

    /// The dispatcher bound to a class path, if any.
    pub fn get(&self, class: &str) -> Option<DispatcherRef> {
        self.slots.read().unwrap().get(class).cloned()
    }

    /// The dispatcher bound to a model type.
    pub fn get_for<M: DispatcherAware>(&self) -> Option<DispatcherRef> {
        self.get(M::CLASS)
    }

    /// Remove and return a class's dispatcher.
    pub fn remove(&self, class: &str) -> Option<DispatcherRef> {
        self.slots.write().unwrap().remove(class)
    }

    /// Whether a class has a dispatcher bound.
    pub fn is_bound(&self, class: &str) -> bool {
        self.slots.read().unwrap().contains_key(class)
    }

    /// The class paths currently bound.
    pub fn classes(&self) -> Vec<String> {
        self.slots.read().unwrap().keys().cloned().collect()
    }

    /// The number of bound classes.
    pub fn len(&self) -> usize {
        self.slots.read().unwrap().len()
    }

    /// Whether no class is bound.
    pub fn is_empty(&self) -> bool {
        self.slots.read().unwrap().is_empty()
    }

    /// Drop every binding.
    pub fn clear(&self) {
        self.slots.write().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::null::NullDispatcher;
    use std::sync::Arc;

    #[test]
    fn test_install_get_remove() {
        let registry = DispatcherRegistry::new();
        assert!(registry.is_empty());

        registry.install("app::model::Customer", Arc::new(NullDispatcher));
        assert!(registry.is_bound("app::model::Customer"));
        assert!(registry.get("app::model::Customer").is_some());
        assert_eq!(registry.len(), 1);

        assert!(registry.remove("app::model::Customer").is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_install_replaces() {
        let registry = DispatcherRegistry::new();
        registry.install("m", Arc::new(NullDispatcher));
        registry.install("m", Arc::new(NullDispatcher));
        assert_eq!(registry.len(), 1);
    }
}
