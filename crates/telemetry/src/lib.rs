//! Telemetry for the oauth gate.
//!
//! Structured logging through `tracing`, plus in-process counters for
//! authentication outcomes.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::*;
pub use tracing_setup::*;
