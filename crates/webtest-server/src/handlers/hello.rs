//! Greeting endpoint: `/hello`, `/hello/`, `/hello/*path`.
//!
//! The sub-path is whatever follows `/hello`, leading slash included, so
//! `/hello` greets with an empty sub-path and `/hello/` with `/`. Wildcard
//! captures come from the `Path` extractor and are percent-decoded before the
//! failure-marker check.

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
};

use crate::app_state::AppState;

pub const ROUTE_PREFIX: &str = "/hello";

/// Sub-path that makes the handler answer 500.
pub const FAIL_MARKER: &str = "/fail";

pub async fn hello(State(state): State<AppState>, path: Option<Path<String>>, uri: Uri) -> impl IntoResponse {
    let sub_path = match path {
        Some(Path(rest)) if rest.starts_with('/') => rest,
        Some(Path(rest)) => format!("/{rest}"),
        // `/hello` and `/hello/` carry no capture.
        None => uri.path().strip_prefix(ROUTE_PREFIX).unwrap_or_default().to_string(),
    };
    greet(state.hostname(), state.greeting(), &sub_path)
}

pub fn greet(hostname: &str, greeting: &str, sub_path: &str) -> (StatusCode, String) {
    if sub_path == FAIL_MARKER {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Fail Hello World from {hostname} ({greeting}): {sub_path}"),
        )
    } else {
        (
            StatusCode::OK,
            format!("Hello World from {hostname} ({greeting}): {sub_path}"),
        )
    }
}
