//! Axum router wiring.
//!
//! Three path groups merged into one router. The metrics middleware is a
//! `route_layer` on the greeting group only, so it runs once per matched
//! greeting request and never for probes, the scrape endpoint, or 404s.
//! Panic recovery wraps everything.

use axum::{
    middleware,
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, handlers, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let hello: Router<AppState> = Router::new()
        .route("/hello", any(handlers::hello))
        .route("/hello/", any(handlers::hello))
        .route("/hello/*path", any(handlers::hello));
    let hello = instrument(hello, &state);

    let probe: Router<AppState> = Router::new()
        .route("/probe/ready", get(ops::ready))
        .route("/probe/alive", get(ops::alive));

    let metrics: Router<AppState> = Router::new().route("/metrics", get(ops::metrics));

    Router::new()
        .merge(hello)
        .merge(probe)
        .merge(metrics)
        .layer(middleware::from_fn(obs::recover_panics))
        .with_state(state)
}

/// Attach request metrics to every route already on `routes`.
///
/// Layer order, outermost first: metrics, panic recovery, handler. A panic is
/// turned into a 500 before the metrics middleware records the outcome.
pub fn instrument(routes: Router<AppState>, state: &AppState) -> Router<AppState> {
    routes
        .route_layer(middleware::from_fn(obs::recover_panics))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
}
