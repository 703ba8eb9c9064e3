//! Host identity used in greeting bodies.

use webtest_core::error::{Result, WebtestError};

/// Resolve the machine's host name. Failure is a startup error.
pub fn resolve_hostname() -> Result<String> {
    let raw = hostname::get().map_err(|e| WebtestError::Hostname(e.to_string()))?;
    let name = raw
        .into_string()
        .map_err(|raw| WebtestError::Hostname(format!("not valid UTF-8: {raw:?}")))?;
    if name.is_empty() {
        return Err(WebtestError::Hostname("empty host name".into()));
    }
    Ok(name)
}
