use binden::testing::CountingContainer;
use binden::{DispatcherRef, ServiceContainer, ServiceMap, SimpleEventDispatcher};
use std::sync::Arc;

/// A counting container with one real dispatcher registered under `id`.
///
/// Returns the container and the real dispatcher so tests can observe
/// both resolution counts and forwarded effects.
pub fn counting_container(id: &str) -> (Arc<CountingContainer>, DispatcherRef) {
    let real: DispatcherRef = Arc::new(SimpleEventDispatcher::new());
    let inner: Arc<dyn ServiceContainer> =
        Arc::new(ServiceMap::new().with_service(id, real.clone()));
    (Arc::new(CountingContainer::new(inner)), real)
}
