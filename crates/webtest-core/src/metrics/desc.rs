//! Family descriptors and the label model.

use crate::error::{Result, WebtestError};

/// Metric type of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Histogram,
}

impl MetricKind {
    /// Name used on the `# TYPE` line.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Histogram => "histogram",
        }
    }
}

/// Name, help text, and label schema of a family. Fixed at construction.
#[derive(Debug, Clone)]
pub struct Desc {
    name: String,
    help: String,
    label_names: Vec<String>,
}

impl Desc {
    pub fn new(name: impl Into<String>, help: impl Into<String>, label_names: &[&str]) -> Result<Self> {
        let name = name.into();
        if !is_valid_metric_name(&name) {
            return Err(WebtestError::InvalidMetric(format!("invalid metric name: {name:?}")));
        }

        let mut names: Vec<String> = Vec::with_capacity(label_names.len());
        for l in label_names {
            if !is_valid_label_name(l) {
                return Err(WebtestError::InvalidMetric(format!(
                    "metric {name}: invalid label name: {l:?}"
                )));
            }
            if names.iter().any(|n| n == l) {
                return Err(WebtestError::InvalidMetric(format!(
                    "metric {name}: duplicate label name: {l}"
                )));
            }
            names.push((*l).to_string());
        }

        Ok(Self {
            name,
            help: help.into(),
            label_names: names,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    /// Build the series key for one observation.
    ///
    /// Values are positional: `values[i]` belongs to `label_names()[i]`, so the
    /// same combination always maps to the same key.
    pub(crate) fn series_key(&self, values: &[&str]) -> Result<Vec<String>> {
        if values.len() != self.label_names.len() {
            return Err(WebtestError::LabelCardinality {
                family: self.name.clone(),
                expected: self.label_names.len(),
                got: values.len(),
            });
        }
        Ok(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
pub fn is_valid_metric_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`, excluding the reserved `__` prefix.
pub fn is_valid_label_name(s: &str) -> bool {
    if s.starts_with("__") {
        return false;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
