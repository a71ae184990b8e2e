//! Laziness and forwarding behavior of the dispatcher proxy.

use binden::testing::RecordingListener;
use binden::{
    DispatchError, Event, EventDispatcher, LazyDispatcher, ServiceId, ServiceMap, listener,
};
use std::sync::Arc;

mod common;
use common::counting_container;

#[test]
fn test_container_untouched_until_first_use() {
    let (container, _real) = counting_container("a");
    let proxy = LazyDispatcher::new(container.clone(), ServiceId::from("a"));

    assert!(!proxy.is_resolved());
    assert_eq!(
        container.resolutions(),
        0,
        "Constructing a proxy must not query the container"
    );
}

#[test]
fn test_resolution_happens_exactly_once() {
    let (container, _real) = counting_container("a");
    let proxy = LazyDispatcher::new(container.clone(), ServiceId::from("a"));

    // Three operations of different kinds: one resolution.
    assert!(!proxy.has_listeners("e").unwrap());
    proxy.add_listener("e", listener(|_| Ok(())), 0).unwrap();
    proxy.dispatch(Event::new("e")).unwrap();

    assert!(proxy.is_resolved());
    assert_eq!(container.resolutions(), 1);
}

#[test]
fn test_forwarding_is_transparent() {
    let (container, real) = counting_container("a");
    let proxy = LazyDispatcher::new(container, ServiceId::from("a"));

    let recorder = RecordingListener::new();
    real.add_listener("e", recorder.as_listener(), 0).unwrap();
    real.add_listener(
        "e",
        listener(|event| {
            if let Some(count) = event.payload_mut::<u32>() {
                *count += 1;
            }
            Ok(())
        }),
        0,
    )
    .unwrap();

    // Through the proxy and directly: identical observable behavior.
    let via_proxy = proxy.dispatch(Event::with_payload("e", 0u32)).unwrap();
    let direct = real.dispatch(Event::with_payload("e", 0u32)).unwrap();

    assert_eq!(via_proxy.payload::<u32>(), direct.payload::<u32>());
    assert_eq!(via_proxy.payload::<u32>(), Some(&1));
    assert_eq!(recorder.names(), vec!["e", "e"]);

    // Listener inspection forwards too.
    assert!(proxy.has_listeners("e").unwrap());
    assert_eq!(
        proxy.listeners("e").unwrap().len(),
        real.listeners("e").unwrap().len()
    );
}

#[test]
fn test_registration_through_proxy_lands_on_real_dispatcher() {
    let (container, real) = counting_container("a");
    let proxy = LazyDispatcher::new(container, ServiceId::from("a"));

    let recorder = RecordingListener::new();
    let id = proxy.add_listener("e", recorder.as_listener(), 0).unwrap();
    real.dispatch(Event::new("e")).unwrap();
    assert_eq!(recorder.count(), 1);

    // And removal through the proxy removes it there as well.
    assert!(proxy.remove_listener("e", id).unwrap());
    assert!(!real.has_listeners("e").unwrap());
}

#[test]
fn test_unregistered_id_fails_at_first_use() {
    let container = Arc::new(ServiceMap::new());
    let proxy = LazyDispatcher::new(container, ServiceId::from("missing"));

    let err = proxy.dispatch(Event::new("e")).unwrap_err();
    match err {
        DispatchError::Resolution(resolution) => {
            assert_eq!(resolution.id.as_str(), "missing");
        }
        other => panic!("expected a resolution error, got: {other}"),
    }

    // Every operation surfaces the same failure.
    assert!(proxy.has_listeners("e").is_err());
    assert!(proxy.add_listener("e", listener(|_| Ok(())), 0).is_err());
    assert!(!proxy.is_resolved());
}

#[test]
fn test_resolve_now_is_eager_and_idempotent() {
    let (container, _real) = counting_container("a");
    let proxy = LazyDispatcher::new(container.clone(), ServiceId::from("a"));

    proxy.resolve_now().unwrap();
    assert!(proxy.is_resolved());

    proxy.resolve_now().unwrap();
    proxy.dispatch(Event::new("e")).unwrap();
    assert_eq!(container.resolutions(), 1);
}
