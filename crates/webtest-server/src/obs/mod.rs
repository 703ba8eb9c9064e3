//! Request observability.
//!
//! The metrics middleware is attached only to the greeting routes; probes and
//! the scrape endpoint are never counted. Panic recovery sits inside it, so a
//! panicking greeting is still recorded as a 500.

pub mod middleware;
pub mod recover;

pub use middleware::track_requests;
pub use recover::recover_panics;
