//! Counter and histogram series semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use webtest_core::error::ErrorCode;
use webtest_core::metrics::{Registry, SeriesValue};

#[test]
fn counter_adds_per_label_combination() {
    let reg = Registry::new();
    let c = reg.counter_vec("req_total", "requests", &["code", "method"]).unwrap();

    assert_eq!(c.get(&["200", "GET"]), None);
    for _ in 0..5 {
        c.inc(&["200", "GET"]).unwrap();
    }
    c.add(&["500", "GET"], 2).unwrap();

    assert_eq!(c.get(&["200", "GET"]), Some(5));
    assert_eq!(c.get(&["500", "GET"]), Some(2));
    assert_eq!(c.get(&["200", "POST"]), None);
}

#[test]
fn wrong_label_arity_is_rejected() {
    let reg = Registry::new();
    let c = reg.counter_vec("req_total", "requests", &["code", "method"]).unwrap();
    let err = c.inc(&["200"]).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::LabelCardinality);

    let h = reg.histogram_vec("lat", "latency", &["code"], &[1.0]).unwrap();
    let err = h.observe(&["200", "GET"], 0.1).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::LabelCardinality);
    assert!(h.get(&["200"]).is_none());
}

#[test]
fn histogram_buckets_are_cumulative() {
    let reg = Registry::new();
    let h = reg
        .histogram_vec("lat", "latency", &["path"], &[0.01, 0.1, 1.0])
        .unwrap();
    assert_eq!(h.bounds(), &[0.01, 0.1, 1.0]);

    for v in [0.005, 0.01, 0.05, 0.5, 3.0] {
        h.observe(&["/x"], v).unwrap();
    }

    let snap = h.get(&["/x"]).unwrap();
    assert_eq!(snap.count, 5);
    assert!((snap.sum - 3.565).abs() < 1e-9);
    assert_eq!(snap.buckets, vec![(0.01, 2), (0.1, 3), (1.0, 4)]);

    let counts: Vec<u64> = snap.buckets.iter().map(|(_, c)| *c).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    assert!(*counts.last().unwrap() <= snap.count);
}

#[test]
fn histogram_rejects_bad_bounds_and_nan() {
    let reg = Registry::new();
    for bounds in [&[][..], &[1.0, 1.0][..], &[2.0, 1.0][..], &[f64::INFINITY][..]] {
        let err = reg.histogram_vec("lat", "x", &[], bounds).err().expect("must fail");
        assert_eq!(err.code(), ErrorCode::InvalidMetric);
    }

    let h = reg.histogram_vec("lat", "x", &[], &[1.0]).unwrap();
    let err = h.observe(&[], f64::NAN).expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::InvalidMetric);
}

#[test]
fn concurrent_updates_are_not_lost() {
    let reg = Registry::new();
    let c = reg.counter_vec("req_total", "requests", &["code"]).unwrap();
    let h = reg.histogram_vec("lat", "latency", &["code"], &[0.5, 1.0]).unwrap();

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let c = Arc::clone(&c);
            let h = Arc::clone(&h);
            thread::spawn(move || {
                for i in 0..1000 {
                    c.inc(&["200"]).unwrap();
                    h.observe(&["200"], if i % 2 == 0 { 0.25 } else { 0.75 }).unwrap();
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(c.get(&["200"]), Some(8000));
    let snap = h.get(&["200"]).unwrap();
    assert_eq!(snap.count, 8000);
    assert_eq!(snap.buckets, vec![(0.5, 4000), (1.0, 8000)]);

    let fam = reg.collect().find(|f| f.name == "lat").unwrap();
    assert_eq!(fam.series.len(), 1);
    match &fam.series[0].value {
        SeriesValue::Histogram(s) => assert_eq!(s.count, 8000),
        other => panic!("unexpected series value: {other:?}"),
    }
}
