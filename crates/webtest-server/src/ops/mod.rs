//! Operational HTTP endpoints.
//!
//! - `/probe/alive` : liveness
//! - `/probe/ready` : readiness
//! - `/metrics`     : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use webtest_core::metrics::exposition::{encode, TEXT_CONTENT_TYPE};

use crate::app_state::AppState;

pub async fn alive() -> impl IntoResponse {
    (StatusCode::OK, "Alive.")
}

pub async fn ready() -> impl IntoResponse {
    (StatusCode::OK, "Ready.")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = encode(state.registry().collect());

    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], body).into_response()
}
