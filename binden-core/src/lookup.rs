//! Model class lookup capability.
//!
//! Generated model classes are known to Binden only by their
//! fully-qualified class paths (`app::model::Customer`). [`ModelLookup`]
//! answers the two questions the binder asks before installing a
//! dispatcher: does this class exist, and does it carry the
//! dispatcher-aware capability. The standard implementation is an explicit
//! registration list (`ModelCatalog` in `binden-std`) built at
//! code-generation time rather than probed at runtime.

/// Name of the capability marker, as reported in binder warnings.
pub const DISPATCHER_AWARE: &str = "DispatcherAware";

/// Answers class existence and capability questions for the binder.
pub trait ModelLookup: Send + Sync {
    /// Whether a class with this fully-qualified path is known.
    fn class_exists(&self, class: &str) -> bool;

    /// Whether the class carries the dispatcher-aware capability.
    ///
    /// Unknown classes are never dispatcher-aware.
    fn is_dispatcher_aware(&self, class: &str) -> bool;
}

/// Compile-time marker for generated model types that accept a dispatcher.
///
/// `CLASS` is the fully-qualified class path that keys the model's slot in
/// a dispatcher registry, and the path the binder matches against its
/// configured bindings. Derivable with `#[derive(DispatcherAware)]` from
/// `binden-macros`.
pub trait DispatcherAware {
    /// Fully-qualified class path of this model type.
    const CLASS: &'static str;
}
