//! Process-wide collection of metric families.
//!
//! The registry is constructed explicitly at startup and handed to whoever
//! records or scrapes; there is no global instance.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::error::{Result, WebtestError};

use super::counter::CounterVec;
use super::desc::{Desc, MetricKind};
use super::histogram::HistogramVec;
use super::snapshot::FamilySnapshot;

/// A registered family that can report its current state.
pub trait Collector: Send + Sync {
    fn desc(&self) -> &Desc;
    fn kind(&self) -> MetricKind;
    fn collect(&self) -> FamilySnapshot;
}

#[derive(Default)]
pub struct Registry {
    families: DashMap<String, Arc<dyn Collector>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            families: DashMap::new(),
        }
    }

    /// Register a family. Fails with `DuplicateName` if the name is taken.
    pub fn register(&self, family: Arc<dyn Collector>) -> Result<()> {
        let name = family.desc().name().to_string();
        match self.families.entry(name) {
            Entry::Occupied(e) => Err(WebtestError::DuplicateName(e.key().clone())),
            Entry::Vacant(e) => {
                tracing::debug!(family = %e.key(), kind = family.kind().as_str(), "metric family registered");
                e.insert(family);
                Ok(())
            }
        }
    }

    /// Create and register a counter family.
    pub fn counter_vec(&self, name: &str, help: &str, label_names: &[&str]) -> Result<Arc<CounterVec>> {
        let c = Arc::new(CounterVec::new(Desc::new(name, help, label_names)?));
        self.register(c.clone())?;
        Ok(c)
    }

    /// Create and register a histogram family.
    pub fn histogram_vec(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
        buckets: &[f64],
    ) -> Result<Arc<HistogramVec>> {
        let h = Arc::new(HistogramVec::new(Desc::new(name, help, label_names)?, buckets)?);
        self.register(h.clone())?;
        Ok(h)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Lazily snapshot every registered family, ordered by name.
    ///
    /// Each family is read only when the iterator reaches it. Calling `collect`
    /// again (or cloning the returned iterator) starts a fresh pass.
    pub fn collect(&self) -> Families {
        let mut collectors: Vec<Arc<dyn Collector>> =
            self.families.iter().map(|r| Arc::clone(r.value())).collect();
        collectors.sort_by(|a, b| a.desc().name().cmp(b.desc().name()));
        Families {
            inner: collectors.into_iter(),
        }
    }
}

/// Iterator returned by [`Registry::collect`].
#[derive(Clone)]
pub struct Families {
    inner: std::vec::IntoIter<Arc<dyn Collector>>,
}

impl Iterator for Families {
    type Item = FamilySnapshot;

    fn next(&mut self) -> Option<FamilySnapshot> {
        self.inner.next().map(|c| c.collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Families {}
