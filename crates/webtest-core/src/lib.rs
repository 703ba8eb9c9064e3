//! webtest core: transport-agnostic metric primitives, error types, and the
//! request-instrumentation kernel.
//!
//! This crate defines the label model, counter/histogram families, the
//! registry, and the text exposition encoder shared by the HTTP server. It
//! carries no transport or runtime dependencies so the instrumentation can be
//! exercised in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `WebtestError`/`Result` so a bad
//! observation never takes the request path down with it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{Result, WebtestError};
