//! Structured logging setup for the UTM binder service.

pub mod tracing_setup;

pub use tracing_setup::*;
