//! Observability concerns: logging/tracing initialization.

mod tracing_init;

pub use tracing_init::init;
