//! Counter family with dynamic labels backed by `DashMap`.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

use super::desc::{Desc, MetricKind};
use super::registry::Collector;
use super::snapshot::{FamilySnapshot, SeriesSnapshot, SeriesValue};

pub struct CounterVec {
    desc: Desc,
    map: DashMap<Vec<String>, AtomicU64>,
}

impl CounterVec {
    pub fn new(desc: Desc) -> Self {
        Self {
            desc,
            map: DashMap::new(),
        }
    }

    /// Increment by 1.
    pub fn inc(&self, values: &[&str]) -> Result<()> {
        self.add(values, 1)
    }

    /// Increment by an arbitrary value. Counters never go down, so the delta is unsigned.
    pub fn add(&self, values: &[&str], v: u64) -> Result<()> {
        let key = self.desc.series_key(values)?;
        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
        Ok(())
    }

    /// Current value, or `None` if the series was never observed.
    pub fn get(&self, values: &[&str]) -> Option<u64> {
        let key = self.desc.series_key(values).ok()?;
        self.map.get(&key).map(|c| c.load(Ordering::Relaxed))
    }
}

impl Collector for CounterVec {
    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Counter
    }

    fn collect(&self) -> FamilySnapshot {
        let mut series: Vec<SeriesSnapshot> = self
            .map
            .iter()
            .map(|r| SeriesSnapshot {
                label_values: r.key().clone(),
                value: SeriesValue::Counter(r.value().load(Ordering::Relaxed)),
            })
            .collect();
        series.sort_by(|a, b| a.label_values.cmp(&b.label_values));

        FamilySnapshot {
            name: self.desc.name().to_string(),
            help: self.desc.help().to_string(),
            kind: MetricKind::Counter,
            label_names: self.desc.label_names().to_vec(),
            series,
        }
    }
}
