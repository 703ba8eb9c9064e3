use serde::Deserialize;
use webtest_core::error::{Result, WebtestError};
use webtest_core::metrics::desc::is_valid_metric_name;
use webtest_core::metrics::histogram::validate_bounds;
use webtest_core::metrics::request::{DEFAULT_LATENCY_BUCKETS, DEFAULT_NAMESPACE};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WebtestError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            greeting: default_greeting(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        let Some((_host, port)) = self.listen.rsplit_once(':') else {
            return Err(WebtestError::Config(format!(
                "server.listen must be host:port or :port, got {:?}",
                self.listen
            )));
        };
        if port.parse::<u16>().is_err() {
            return Err(WebtestError::Config(format!(
                "server.listen has an invalid port: {:?}",
                self.listen
            )));
        }
        Ok(())
    }

    /// Address handed to the listener. An empty host (`:8080`) means all interfaces.
    pub fn bind_addr(&self) -> String {
        if self.listen.starts_with(':') {
            format!("0.0.0.0{}", self.listen)
        } else {
            self.listen.clone()
        }
    }
}

fn default_listen() -> String {
    ":8080".into()
}
fn default_greeting() -> String {
    "simple webtest".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Seconds; `+Inf` is implicit.
    #[serde(default = "default_latency_buckets")]
    pub latency_buckets: Vec<f64>,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            latency_buckets: default_latency_buckets(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if !self.namespace.is_empty() && !is_valid_metric_name(&self.namespace) {
            return Err(WebtestError::Config(format!(
                "metrics.namespace is not a valid metric name prefix: {:?}",
                self.namespace
            )));
        }
        validate_bounds(&self.latency_buckets)
            .map_err(|e| WebtestError::Config(format!("metrics.latency_buckets: {e}")))
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.into()
}
fn default_latency_buckets() -> Vec<f64> {
    DEFAULT_LATENCY_BUCKETS.to_vec()
}
