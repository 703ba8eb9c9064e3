//! Metrics example HTTP server library.
//!
//! Wires config, host identity, the metric registry, and the axum router into
//! one service. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod host;
pub mod obs;
pub mod ops;
pub mod router;
