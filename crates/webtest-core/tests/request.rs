//! Two-phase request instrumentation tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::thread;
use std::time::Duration;

use webtest_core::error::ErrorCode;
use webtest_core::metrics::request::DEFAULT_LATENCY_BUCKETS;
use webtest_core::metrics::{Registry, RequestMetrics, RequestTimer};

#[test]
fn timer_measures_elapsed_seconds() {
    let timer = RequestTimer::start();
    thread::sleep(Duration::from_millis(20));
    let out = timer.finish(200, "GET", "/hello/x");

    assert_eq!(out.status, 200);
    assert_eq!(out.method, "GET");
    assert_eq!(out.path, "/hello/x");
    assert!(out.elapsed >= 0.02, "elapsed = {}", out.elapsed);
    assert!(out.elapsed < 5.0);
}

#[test]
fn observe_updates_both_families_with_same_labels() {
    let reg = Registry::new();
    let m = RequestMetrics::register(&reg, "metrics_example", &DEFAULT_LATENCY_BUCKETS).unwrap();
    assert!(reg.contains("metrics_example_request_counter"));
    assert!(reg.contains("metrics_example_request_latency"));

    let before = m.requests().get(&["200", "POST", "/hello/n"]).unwrap_or(0);
    for _ in 0..4 {
        let out = RequestTimer::start().finish(200, "POST", "/hello/n");
        m.observe(&out).unwrap();
    }

    assert_eq!(m.requests().get(&["200", "POST", "/hello/n"]), Some(before + 4));
    let lat = m.latency().get(&["200", "POST", "/hello/n"]).unwrap();
    assert_eq!(lat.count, 4);
    assert_eq!(lat.buckets.len(), DEFAULT_LATENCY_BUCKETS.len());
    assert!(lat.buckets.iter().all(|(_, c)| *c <= lat.count));
}

#[test]
fn double_registration_collides() {
    let reg = Registry::new();
    RequestMetrics::register(&reg, "svc", &DEFAULT_LATENCY_BUCKETS).unwrap();
    let err = RequestMetrics::register(&reg, "svc", &DEFAULT_LATENCY_BUCKETS)
        .err()
        .expect("must fail");
    assert_eq!(err.code(), ErrorCode::DuplicateName);

    // A different namespace coexists.
    RequestMetrics::register(&reg, "", &DEFAULT_LATENCY_BUCKETS).unwrap();
    assert!(reg.contains("request_counter"));
    assert_eq!(reg.len(), 4);
}
