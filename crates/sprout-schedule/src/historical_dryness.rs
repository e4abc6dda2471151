//! Backfilled dryness: when a plant is found bone dry, the operator may
//! estimate when it actually dried out. That estimate becomes a separate,
//! earlier check and the instant used for decay refinement, leaving the real
//! check at its own date.
//!
//! The dry date is never inferred. Without an explicit estimate, nothing here
//! changes the check.

use chrono::{DateTime, Utc};
use sprout_core::errors::CheckError;
use sprout_core::{Check, Wetness};

const NOTE_DATE_FORMAT: &str = "%B %-d, %Y";

/// Whether a dry-date estimate applies to this reading.
pub fn is_active(wetness: Wetness, dry_at: Option<DateTime<Utc>>) -> bool {
    wetness.is_bone_dry() && dry_at.is_some()
}

/// Instant the decay estimator should treat as the observation.
///
/// The estimated dry date when active, otherwise the check's own instant.
pub fn decay_observation_instant(
    wetness: Wetness,
    observed_at: DateTime<Utc>,
    dry_at: Option<DateTime<Utc>>,
) -> DateTime<Utc> {
    match dry_at {
        Some(dry_at) if is_active(wetness, Some(dry_at)) => dry_at,
        _ => observed_at,
    }
}

/// Reject a dry date the plant's history rules out.
pub fn validate(
    dry_at: DateTime<Utc>,
    observed_at: DateTime<Utc>,
    last_watered_at: Option<DateTime<Utc>>,
) -> Result<(), CheckError> {
    if dry_at > observed_at {
        return Err(CheckError::DryDateAfterObservation {
            dry_at,
            observed_at,
        });
    }
    if let Some(watered_at) = last_watered_at {
        if dry_at <= watered_at {
            return Err(CheckError::DryDateBeforeWatering { dry_at, watered_at });
        }
    }
    Ok(())
}

/// The synthetic check recording when the plant became dry.
///
/// `Ok(None)` when the reading is not bone dry or no estimate was given.
/// The returned check carries no reminder of its own.
pub fn historical_check(
    plant_id: &str,
    wetness: Wetness,
    dry_at: Option<DateTime<Utc>>,
    observed_at: DateTime<Utc>,
    last_watered_at: Option<DateTime<Utc>>,
) -> Result<Option<Check>, CheckError> {
    let Some(dry_at) = dry_at.filter(|_| wetness.is_bone_dry()) else {
        return Ok(None);
    };
    validate(dry_at, observed_at, last_watered_at)?;

    tracing::debug!(plant_id, %dry_at, %observed_at, "recording historical dry check");

    Ok(Some(Check {
        id: None,
        plant_id: plant_id.to_string(),
        check_date: dry_at,
        wetness_scale: Wetness::BONE_DRY,
        notes: Some(note(dry_at, observed_at)),
    }))
}

/// Auto-generated explanation attached to the historical check.
pub fn note(dry_at: DateTime<Utc>, observed_at: DateTime<Utc>) -> String {
    format!(
        "Found completely dry on {}. Estimated to have dried out on {}.",
        observed_at.format(NOTE_DATE_FORMAT),
        dry_at.format(NOTE_DATE_FORMAT)
    )
}
