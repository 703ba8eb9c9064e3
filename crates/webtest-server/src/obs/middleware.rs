//! Request metrics middleware.
//!
//! Wraps exactly one downstream call: start the timer, run the handler to
//! completion, then record the final status under `(code, method, endpoint)`.
//! The response is returned untouched.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use webtest_core::metrics::RequestTimer;

use crate::app_state::AppState;

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let timer = RequestTimer::start();
    let resp = next.run(req).await;
    let outcome = timer.finish(resp.status().as_u16(), method, path);

    tracing::info!(
        method = %outcome.method,
        path = %outcome.path,
        status = outcome.status,
        elapsed_s = outcome.elapsed,
        "request"
    );

    // Label arity is fixed by construction; a failure here is a bug, not traffic.
    if let Err(e) = state.request_metrics().observe(&outcome) {
        tracing::error!(error = %e, code = e.code().as_str(), "request metrics not recorded");
    }

    resp
}
