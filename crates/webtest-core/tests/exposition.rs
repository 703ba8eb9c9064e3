//! Text exposition output tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use webtest_core::metrics::exposition::encode;
use webtest_core::metrics::request::{DEFAULT_LATENCY_BUCKETS, LABEL_NAMES};
use webtest_core::metrics::{Registry, RequestMetrics, RequestOutcome};

fn outcome(status: u16, path: &str, elapsed: f64) -> RequestOutcome {
    RequestOutcome {
        status,
        method: "GET".into(),
        path: path.into(),
        elapsed,
    }
}

#[test]
fn counter_family_layout() {
    let reg = Registry::new();
    let c = reg.counter_vec("demo_total", "Demo\ncounter", &["path"]).unwrap();
    c.add(&["/a\"b"], 7).unwrap();

    let text = encode(reg.collect());
    assert_eq!(
        text,
        "# HELP demo_total Demo\\ncounter\n\
         # TYPE demo_total counter\n\
         demo_total{path=\"/a\\\"b\"} 7\n"
    );
}

#[test]
fn histogram_family_layout() {
    let reg = Registry::new();
    let h = reg.histogram_vec("lat", "Latency", &[], &[0.5, 1.0]).unwrap();
    h.observe(&[], 0.25).unwrap();
    h.observe(&[], 2.0).unwrap();

    let text = encode(reg.collect());
    assert_eq!(
        text,
        "# HELP lat Latency\n\
         # TYPE lat histogram\n\
         lat_bucket{le=\"0.5\"} 1\n\
         lat_bucket{le=\"1\"} 1\n\
         lat_bucket{le=\"+Inf\"} 2\n\
         lat_sum 2.25\n\
         lat_count 2\n"
    );
}

#[test]
fn empty_registry_encodes_headers_only() {
    let reg = Registry::new();
    RequestMetrics::register(&reg, "metrics_example", &DEFAULT_LATENCY_BUCKETS).unwrap();

    let text = encode(reg.collect());
    assert!(text.contains("# TYPE metrics_example_request_counter counter"));
    assert!(text.contains("# TYPE metrics_example_request_latency histogram"));
    assert!(!text.lines().any(|l| !l.starts_with('#')));
}

#[test]
fn one_series_per_label_combination() {
    let reg = Registry::new();
    let m = RequestMetrics::register(&reg, "metrics_example", &DEFAULT_LATENCY_BUCKETS).unwrap();

    for _ in 0..3 {
        m.observe(&outcome(200, "/hello/x", 0.002)).unwrap();
    }
    m.observe(&outcome(500, "/hello/fail", 0.2)).unwrap();
    m.observe(&outcome(200, "/hello", 7.0)).unwrap();

    let text = encode(reg.collect());

    let mut seen = HashSet::new();
    let mut counter_series = 0;
    for line in text.lines().filter(|l| !l.starts_with('#')) {
        let (series, _value) = line.rsplit_once(' ').unwrap();
        assert!(seen.insert(series.to_string()), "duplicate series: {series}");
        if series.starts_with("metrics_example_request_counter{") {
            counter_series += 1;
        }
    }
    assert_eq!(counter_series, 3);

    assert!(text.contains(
        "metrics_example_request_counter{code=\"200\",method=\"GET\",endpoint=\"/hello/x\"} 3\n"
    ));
    assert!(text.contains(
        "metrics_example_request_counter{code=\"500\",method=\"GET\",endpoint=\"/hello/fail\"} 1\n"
    ));
    // 7s lands above every bound: only +Inf counts it.
    assert!(text.contains(
        "metrics_example_request_latency_bucket{code=\"200\",method=\"GET\",endpoint=\"/hello\",le=\"5\"} 0\n"
    ));
    assert!(text.contains(
        "metrics_example_request_latency_bucket{code=\"200\",method=\"GET\",endpoint=\"/hello\",le=\"+Inf\"} 1\n"
    ));
    assert_eq!(LABEL_NAMES, ["code", "method", "endpoint"]);
}
