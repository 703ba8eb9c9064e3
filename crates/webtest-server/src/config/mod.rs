//! Server config loader.
//!
//! Defaults, then an optional strict YAML file named by `WEBTEST_CONFIG`, then
//! the `GREETING` / `LISTEN_ADDRESS` environment overrides.

pub mod schema;

use std::{env, fs};

use webtest_core::error::{Result, WebtestError};

pub use schema::{MetricsSection, ServerConfig, ServerSection};

pub const CONFIG_PATH_ENV: &str = "WEBTEST_CONFIG";
pub const GREETING_ENV: &str = "GREETING";
pub const LISTEN_ADDRESS_ENV: &str = "LISTEN_ADDRESS";

/// Load the effective config from the process environment.
pub fn load() -> Result<ServerConfig> {
    let mut cfg = match env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => load_from_file(&path)?,
        _ => ServerConfig::default(),
    };
    apply_env(&mut cfg, |k| env::var(k).ok());
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WebtestError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| WebtestError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply environment overrides. Unset and empty variables keep the current value.
pub fn apply_env<F>(cfg: &mut ServerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(GREETING_ENV).filter(|v| !v.is_empty()) {
        cfg.server.greeting = v;
    }
    if let Some(v) = lookup(LISTEN_ADDRESS_ENV).filter(|v| !v.is_empty()) {
        cfg.server.listen = v;
    }
}
