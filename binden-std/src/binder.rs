//! Model binder.
//!
//! Walks a configured list of (service identifier, model class) bindings
//! and installs a dispatcher into each eligible class's registry slot:
//! a [`LazyDispatcher`] on initialize, a [`NullDispatcher`] on
//! uninitialize. Ineligible bindings are logged at warning level and
//! skipped; one binding's outcome never affects another.

use crate::lazy::LazyDispatcher;
use crate::logger::NullLogger;
use crate::null::NullDispatcher;
use crate::registry::DispatcherRegistry;
use binden_core::{
    BindLogger, DISPATCHER_AWARE, DispatcherRef, ModelLookup, ServiceContainer, ServiceId,
};
use std::sync::Arc;

/// Namespace segment inserted before the final path component to derive
/// a model's generated base class path.
const BASE_SEGMENT: &str = "base";

/// One configured binding: which container service to attach to which
/// model class.
#[derive(Debug, Clone)]
pub struct ModelBinding {
    /// Identifier of the dispatcher service inside the container.
    pub service_id: ServiceId,
    /// Fully-qualified path of the model class to bind.
    pub class: String,
}

impl ModelBinding {
    /// Create a binding.
    pub fn new(service_id: impl Into<ServiceId>, class: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            class: class.into(),
        }
    }
}

/// Which dispatcher the traversal installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode {
    /// Install a [`LazyDispatcher`] bound to the binding's service id.
    Initialize,
    /// Install a [`NullDispatcher`].
    Uninitialize,
}

impl BindMode {
    fn dispatcher(self, container: &Arc<dyn ServiceContainer>, id: &ServiceId) -> DispatcherRef {
        match self {
            BindMode::Initialize => Arc::new(LazyDispatcher::new(container.clone(), id.clone())),
            BindMode::Uninitialize => Arc::new(NullDispatcher),
        }
    }
}

/// Binds the dispatcher capability onto generated model classes.
///
/// Intended to run once during application bootstrap. Traversal never
/// fails: the three eligibility checks (base class known, class known,
/// class dispatcher-aware) each log one warning and skip the binding.
pub struct ModelBinder {
    container: Arc<dyn ServiceContainer>,
    lookup: Arc<dyn ModelLookup>,
    registry: Arc<DispatcherRegistry>,
    bindings: Vec<ModelBinding>,
    logger: Arc<dyn BindLogger>,
}

impl ModelBinder {
    /// Create a binder over the given bindings.
    ///
    /// Warnings are discarded until a logger is set with
    /// [`ModelBinder::with_logger`].
    pub fn new(
        container: Arc<dyn ServiceContainer>,
        lookup: Arc<dyn ModelLookup>,
        registry: Arc<DispatcherRegistry>,
        bindings: Vec<ModelBinding>,
    ) -> Self {
        Self {
            container,
            lookup,
            registry,
            bindings,
            logger: Arc::new(NullLogger),
        }
    }

    /// Set the warning sink.
    pub fn with_logger(mut self, logger: Arc<dyn BindLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Install a lazy dispatcher proxy on every eligible model class.
    pub fn initialize_models(&self) {
        self.bind_models(BindMode::Initialize);
    }

    /// Install a no-op dispatcher on every eligible model class.
    pub fn uninitialize_models(&self) {
        self.bind_models(BindMode::Uninitialize);
    }

    /// Shared traversal.
    ///
    /// Has to tolerate unknown classes: it runs during boot and so may be
    /// called before model generation has produced them.
    fn bind_models(&self, mode: BindMode) {
        for binding in &self.bindings {
            let base = base_class_of(&binding.class);
            if !self.lookup.class_exists(&base) {
                self.logger
                    .warn(&format!("The class \"{}\" does not exist.", base));
                continue;
            }

            if !self.lookup.class_exists(&binding.class) {
                self.logger.warn(&format!(
                    "The class \"{}\" does not exist. Either your model is not generated yet or you have an error in your listener configuration.",
                    binding.class
                ));
                continue;
            }

            if !self.lookup.is_dispatcher_aware(&binding.class) {
                self.logger.warn(&format!(
                    "The class \"{}\" does not implement \"{}\". Either your model is outdated or you forgot to add the required behavior.",
                    binding.class, DISPATCHER_AWARE
                ));
                continue;
            }

            let dispatcher = mode.dispatcher(&self.container, &binding.service_id);
            self.registry.install(binding.class.clone(), dispatcher);
        }
    }
}

/// Derives the generated base class path for a model class path:
/// `app::model::Customer` becomes `app::model::base::Customer`.
pub fn base_class_of(class: &str) -> String {
    match class.rfind("::") {
        Some(index) => format!(
            "{}::{}::{}",
            &class[..index],
            BASE_SEGMENT,
            &class[index + 2..]
        ),
        None => format!("{}::{}", BASE_SEGMENT, class),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_class_of_nested_path() {
        assert_eq!(
            base_class_of("app::model::Customer"),
            "app::model::base::Customer"
        );
    }

    #[test]
    fn test_base_class_of_single_segment() {
        assert_eq!(base_class_of("Customer"), "base::Customer");
    }

    #[test]
    fn test_base_class_of_two_segments() {
        assert_eq!(base_class_of("model::Order"), "model::base::Order");
    }
}
