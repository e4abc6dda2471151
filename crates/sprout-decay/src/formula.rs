use chrono::{DateTime, Utc};
use sprout_core::constants::{FULL_SATURATION, HOURS_PER_DAY};
use sprout_core::Wetness;

/// Fractional days between watering and observation, counted in whole
/// elapsed hours.
///
/// Returns `None` when less than one hour separates the two instants,
/// including an observation before the watering.
pub fn days_since_watering(watered_at: DateTime<Utc>, observed_at: DateTime<Utc>) -> Option<f64> {
    let hours = (observed_at - watered_at).num_hours();
    if hours <= 0 {
        return None;
    }
    Some(hours as f64 / HOURS_PER_DAY)
}

/// Rate implied by a single reading: `(10 - wetness) / days`.
///
/// A just-watered reading (wetness 10) yields 0.
pub fn observed_rate(wetness: Wetness, days_since_watering: f64) -> f64 {
    (FULL_SATURATION - wetness.as_f64()) / days_since_watering
}

/// Equal-weight average of the prior rate and the observed rate.
pub fn refine(prior_per_day: f64, observed_per_day: f64) -> f64 {
    (prior_per_day + observed_per_day) / 2.0
}
