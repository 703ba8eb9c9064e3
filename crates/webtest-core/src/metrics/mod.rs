//! In-process metric primitives.
//!
//! Families are registered once into a [`Registry`] and hold one series per
//! distinct label-value combination. Series are created lazily on first
//! observation and live for the rest of the process. State is read back by
//! [`Registry::collect`] and rendered with [`exposition::encode`].

pub mod counter;
pub mod desc;
pub mod exposition;
pub mod histogram;
pub mod registry;
pub mod request;
pub mod snapshot;

pub use counter::CounterVec;
pub use desc::{Desc, MetricKind};
pub use histogram::HistogramVec;
pub use registry::{Collector, Families, Registry};
pub use request::{RequestMetrics, RequestOutcome, RequestTimer};
pub use snapshot::{FamilySnapshot, HistogramSnapshot, SeriesSnapshot, SeriesValue};
