use chrono::{DateTime, Utc};

/// Rejected check input.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("estimated dry date {dry_at} is after the observation at {observed_at}")]
    DryDateAfterObservation {
        dry_at: DateTime<Utc>,
        observed_at: DateTime<Utc>,
    },

    /// The plant cannot have dried out before it was last watered.
    #[error("estimated dry date {dry_at} is not after the last watering at {watered_at}")]
    DryDateBeforeWatering {
        dry_at: DateTime<Utc>,
        watered_at: DateTime<Utc>,
    },
}
