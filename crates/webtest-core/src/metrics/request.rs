//! Request instrumentation kernel.
//!
//! Two-phase contract used by the HTTP middleware:
//! 1. [`RequestTimer::start`] before the handler runs.
//! 2. [`RequestTimer::finish`] once the response status is known, producing a
//!    [`RequestOutcome`] that [`RequestMetrics::observe`] records into the
//!    counter and latency families under the same `(code, method, endpoint)`
//!    label triple.

use std::sync::Arc;
use std::time::Instant;

use crate::error::Result;

use super::counter::CounterVec;
use super::histogram::HistogramVec;
use super::registry::Registry;

/// Label schema shared by both request families, in positional order.
pub const LABEL_NAMES: [&str; 3] = ["code", "method", "endpoint"];

pub const DEFAULT_NAMESPACE: &str = "metrics_example";

/// Latency bucket bounds in seconds.
pub const DEFAULT_LATENCY_BUCKETS: [f64; 10] = [0.005, 0.01, 0.05, 0.1, 0.3, 0.5, 0.9, 1.0, 2.0, 5.0];

const COUNTER_HELP: &str = "Counter of the requests for the hello endpoint";
const LATENCY_HELP: &str = "Latency of the requests for the hello endpoint";

/// Monotonic start mark for one request.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn finish(self, status: u16, method: impl Into<String>, path: impl Into<String>) -> RequestOutcome {
        RequestOutcome {
            status,
            method: method.into(),
            path: path.into(),
            elapsed: self.start.elapsed().as_secs_f64(),
        }
    }
}

/// A completed exchange as seen by the middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOutcome {
    pub status: u16,
    pub method: String,
    pub path: String,
    /// Seconds.
    pub elapsed: f64,
}

/// Handles to the two request families.
#[derive(Clone)]
pub struct RequestMetrics {
    requests: Arc<CounterVec>,
    latency: Arc<HistogramVec>,
}

impl RequestMetrics {
    /// Register `<namespace>_request_counter` and `<namespace>_request_latency`.
    /// An empty namespace registers the bare names.
    pub fn register(registry: &Registry, namespace: &str, buckets: &[f64]) -> Result<Self> {
        let requests = registry.counter_vec(&family_name(namespace, "request_counter"), COUNTER_HELP, &LABEL_NAMES)?;
        let latency = registry.histogram_vec(
            &family_name(namespace, "request_latency"),
            LATENCY_HELP,
            &LABEL_NAMES,
            buckets,
        )?;
        Ok(Self { requests, latency })
    }

    /// Count the request and record its latency.
    pub fn observe(&self, outcome: &RequestOutcome) -> Result<()> {
        let code = outcome.status.to_string();
        let labels = [code.as_str(), outcome.method.as_str(), outcome.path.as_str()];
        self.requests.inc(&labels)?;
        self.latency.observe(&labels, outcome.elapsed)
    }

    pub fn requests(&self) -> &CounterVec {
        &self.requests
    }

    pub fn latency(&self) -> &HistogramVec {
        &self.latency
    }
}

fn family_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}_{name}")
    }
}
