//! Observability for lexmodel: subscriber setup and span attribute names.

pub mod attrs;
pub mod tracing_setup;

pub use tracing_setup::{init_scoped_tracing, init_tracing, shutdown_tracing, verbosity_filter};
