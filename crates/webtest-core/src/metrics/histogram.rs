//! Histogram family with fixed bucket bounds.
//!
//! Bucket counts are stored cumulatively: an observation bumps every bucket
//! whose upper bound is >= the value. Each series sits behind its own mutex so
//! count, sum, and buckets always move together and a scrape never sees a
//! count without its matching bucket.

use dashmap::DashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::{Result, WebtestError};

use super::desc::{Desc, MetricKind};
use super::registry::Collector;
use super::snapshot::{FamilySnapshot, HistogramSnapshot, SeriesSnapshot, SeriesValue};

#[derive(Debug)]
struct HistogramState {
    buckets: Vec<u64>,
    sum: f64,
    count: u64,
}

impl HistogramState {
    fn new(n: usize) -> Self {
        Self {
            buckets: vec![0; n],
            sum: 0.0,
            count: 0,
        }
    }
}

pub struct HistogramVec {
    desc: Desc,
    bounds: Vec<f64>,
    map: DashMap<Vec<String>, Mutex<HistogramState>>,
}

impl HistogramVec {
    /// `bounds` must be non-empty, finite, and strictly ascending. `+Inf` is
    /// always appended on output and must not be listed.
    pub fn new(desc: Desc, bounds: &[f64]) -> Result<Self> {
        if desc.label_names().iter().any(|l| l == "le") {
            return Err(WebtestError::InvalidMetric(format!(
                "histogram {}: label name \"le\" is reserved",
                desc.name()
            )));
        }
        validate_bounds(bounds).map_err(|e| {
            WebtestError::InvalidMetric(format!("histogram {}: {e}", desc.name()))
        })?;

        Ok(Self {
            desc,
            bounds: bounds.to_vec(),
            map: DashMap::new(),
        })
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Record one value into the series selected by `values`.
    pub fn observe(&self, values: &[&str], v: f64) -> Result<()> {
        if v.is_nan() {
            return Err(WebtestError::InvalidMetric(format!(
                "histogram {}: cannot observe NaN",
                self.desc.name()
            )));
        }
        let key = self.desc.series_key(values)?;

        let hist = self
            .map
            .entry(key)
            .or_insert_with(|| Mutex::new(HistogramState::new(self.bounds.len())));
        let mut st = hist.lock().unwrap_or_else(PoisonError::into_inner);

        st.count += 1;
        st.sum += v;
        for (i, &b) in self.bounds.iter().enumerate() {
            if v <= b {
                st.buckets[i] += 1;
            }
        }
        Ok(())
    }

    /// Snapshot of one series, or `None` if it was never observed.
    pub fn get(&self, values: &[&str]) -> Option<HistogramSnapshot> {
        let key = self.desc.series_key(values).ok()?;
        self.map.get(&key).map(|h| self.snapshot(&h))
    }

    fn snapshot(&self, hist: &Mutex<HistogramState>) -> HistogramSnapshot {
        let st = hist.lock().unwrap_or_else(PoisonError::into_inner);
        HistogramSnapshot {
            buckets: self.bounds.iter().copied().zip(st.buckets.iter().copied()).collect(),
            sum: st.sum,
            count: st.count,
        }
    }
}

impl Collector for HistogramVec {
    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Histogram
    }

    fn collect(&self) -> FamilySnapshot {
        let mut series: Vec<SeriesSnapshot> = self
            .map
            .iter()
            .map(|r| SeriesSnapshot {
                label_values: r.key().clone(),
                value: SeriesValue::Histogram(self.snapshot(r.value())),
            })
            .collect();
        series.sort_by(|a, b| a.label_values.cmp(&b.label_values));

        FamilySnapshot {
            name: self.desc.name().to_string(),
            help: self.desc.help().to_string(),
            kind: MetricKind::Histogram,
            label_names: self.desc.label_names().to_vec(),
            series,
        }
    }
}

/// Check bucket bounds: non-empty, finite, strictly ascending.
pub fn validate_bounds(bounds: &[f64]) -> std::result::Result<(), String> {
    if bounds.is_empty() {
        return Err("buckets must not be empty".into());
    }
    if let Some(b) = bounds.iter().find(|b| !b.is_finite()) {
        return Err(format!("bucket bound must be finite, got {b}"));
    }
    if bounds.windows(2).any(|w| w[0] >= w[1]) {
        return Err("bucket bounds must be strictly ascending".into());
    }
    Ok(())
}
