//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use sprout_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Build the filter: `SPROUT_LOG` wins over the configured level.
///
/// Falls back to `info` when neither parses.
pub fn resolve_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env("SPROUT_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// Idempotent: only the first call installs a subscriber. Later calls, or a
/// subscriber installed elsewhere, are left alone.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = resolve_filter(config);
    let json = config.json;
    INIT.call_once(move || {
        let result = if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true))
                .with(filter)
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    init_tracing(&ObservabilityConfig {
        log_level: filter.to_string(),
        ..ObservabilityConfig::default()
    });
}
