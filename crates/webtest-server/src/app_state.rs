//! Shared application state.
//!
//! Owns the metric registry and the request families registered into it.
//! Built once before the listener starts; handlers and the middleware get a
//! cheap clone.

use std::sync::Arc;

use webtest_core::error::Result;
use webtest_core::metrics::{Registry, RequestMetrics};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    hostname: String,
    registry: Registry,
    request_metrics: RequestMetrics,
}

impl AppState {
    /// Build application state and register the request families.
    /// A family name collision is returned to the caller as a startup error.
    pub fn new(cfg: ServerConfig, hostname: String) -> Result<Self> {
        let registry = Registry::new();
        let request_metrics = RequestMetrics::register(
            &registry,
            &cfg.metrics.namespace,
            &cfg.metrics.latency_buckets,
        )?;

        for family in registry.collect() {
            tracing::info!(family = %family.name, kind = family.kind.as_str(), "metric family registered");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                hostname,
                registry,
                request_metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn hostname(&self) -> &str {
        &self.inner.hostname
    }

    pub fn greeting(&self) -> &str {
        &self.inner.cfg.server.greeting
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn request_metrics(&self) -> &RequestMetrics {
        &self.inner.request_metrics
    }
}
