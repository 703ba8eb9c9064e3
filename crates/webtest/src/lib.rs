//! Top-level facade crate for the metrics example service.
//!
//! Re-exports the metric primitives and the HTTP server library so users can depend on a single crate.

pub mod core {
    pub use webtest_core::*;
}

pub mod server {
    pub use webtest_server::*;
}
