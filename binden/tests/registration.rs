//! Link-time model registration via the derive macro.
//!
//! Compiled only with the `macros` feature, which pulls in `inventory`.

#![cfg(feature = "macros")]

use binden::{DispatcherAware, ModelCatalog, ModelLookup};

// Mimics a generated model tree: a base module registered as plain
// classes, user models deriving the capability.
mod app {
    pub mod model {
        pub mod base {
            binden::register_model_class!("app::model::base::Customer");
        }

        use binden::DispatcherAware;

        #[derive(DispatcherAware)]
        #[dispatcher_aware(class = "app::model::Customer")]
        pub struct Customer;
    }
}

#[derive(DispatcherAware)]
struct Order;

#[test]
fn test_class_override_is_used() {
    assert_eq!(app::model::Customer::CLASS, "app::model::Customer");
}

#[test]
fn test_default_class_is_module_path() {
    // At the test-crate root the module path is just the crate name.
    assert!(Order::CLASS.ends_with("::Order"));
}

#[test]
fn test_discover_collects_registrations() {
    let catalog = ModelCatalog::discover();

    assert!(catalog.class_exists("app::model::base::Customer"));
    assert!(!catalog.is_dispatcher_aware("app::model::base::Customer"));

    assert!(catalog.class_exists("app::model::Customer"));
    assert!(catalog.is_dispatcher_aware("app::model::Customer"));

    assert!(catalog.class_exists(Order::CLASS));
    assert!(catalog.is_dispatcher_aware(Order::CLASS));
}
