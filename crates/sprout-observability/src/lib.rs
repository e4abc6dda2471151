//! # sprout-observability
//!
//! Structured logging for the Sprout engine: subscriber setup driven by
//! [`ObservabilityConfig`](sprout_core::config::ObservabilityConfig) and span
//! macros shared by the decay and scheduling crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, resolve_filter};
