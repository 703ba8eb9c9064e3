//! Point-in-time copies of family state, produced by `Collector::collect`.

use super::desc::MetricKind;

#[derive(Debug, Clone)]
pub struct FamilySnapshot {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub label_names: Vec<String>,
    /// Sorted by label values.
    pub series: Vec<SeriesSnapshot>,
}

impl FamilySnapshot {
    /// Find the series for an exact label-value combination.
    pub fn series(&self, values: &[&str]) -> Option<&SeriesSnapshot> {
        self.series.iter().find(|s| {
            s.label_values.len() == values.len()
                && s.label_values.iter().zip(values).all(|(a, b)| a == b)
        })
    }
}

#[derive(Debug, Clone)]
pub struct SeriesSnapshot {
    pub label_values: Vec<String>,
    pub value: SeriesValue,
}

#[derive(Debug, Clone)]
pub enum SeriesValue {
    Counter(u64),
    Histogram(HistogramSnapshot),
}

/// Histogram state as seen under the series lock.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    /// `(upper_bound, cumulative_count)` in ascending bound order; `+Inf` is implicit.
    pub buckets: Vec<(f64, u64)>,
    pub sum: f64,
    pub count: u64,
}
