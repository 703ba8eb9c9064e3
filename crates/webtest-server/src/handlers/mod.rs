//! Application handlers.

pub mod hello;

pub use hello::hello;
