//! Error types for the Sprout engine.
//!
//! Missing history is never an error: it is reported through
//! [`DecayEstimate::Unavailable`](crate::models::DecayEstimate). Errors here
//! cover invalid caller input and configuration problems.

mod check_error;
mod config_error;

pub use check_error::CheckError;
pub use config_error::ConfigError;

/// Top-level error for all Sprout operations.
#[derive(Debug, thiserror::Error)]
pub enum SproutError {
    #[error("wetness {value} outside 0..=10")]
    WetnessOutOfRange { value: i64 },

    #[error("invalid decay rate {raw:?}: {reason}")]
    InvalidDecayRate { raw: String, reason: String },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("check error: {0}")]
    CheckError(#[from] CheckError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type SproutResult<T> = Result<T, SproutError>;
