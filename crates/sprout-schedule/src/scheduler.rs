use chrono::{DateTime, Duration, Utc};
use sprout_core::config::{defaults, ScheduleConfig};
use sprout_core::constants::{FULL_SATURATION, HOURS_PER_DAY, MILLIS_PER_HOUR, MINIMUM_CHECK_GAP_DAYS};
use sprout_core::{DecayEstimate, InsufficientData, Wetness};
use sprout_observability::schedule_span;

use crate::recommendation::{DecayBasis, Recommendation};

/// Everything the decision table looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRequest {
    pub wetness: Wetness,
    pub will_be_watered: bool,
    /// Fixed per-plant interval. `None` or `Some(0)` means unset.
    pub default_interval_days: Option<u32>,
    pub decay: DecayEstimate,
    /// Instant the next check is counted from.
    pub reference: DateTime<Utc>,
}

/// Computes the next recommended check date.
///
/// Evaluated in order:
/// 1. Watering with a fixed interval set → `reference + interval` days.
/// 2. No decay estimate → not computable.
/// 3. Otherwise count down to the target wetness at the refined rate, from
///    saturation when watering or from the current reading when not,
///    never less than one day.
#[derive(Debug, Clone, Copy)]
pub struct NextCheckScheduler {
    target_check_wetness: f64,
}

impl NextCheckScheduler {
    pub fn new() -> Self {
        Self {
            target_check_wetness: defaults::DEFAULT_TARGET_CHECK_WETNESS,
        }
    }

    pub fn from_config(config: &ScheduleConfig) -> Self {
        Self {
            target_check_wetness: config.target_check_wetness,
        }
    }

    pub fn target_check_wetness(&self) -> f64 {
        self.target_check_wetness
    }

    pub fn schedule(&self, request: &ScheduleRequest) -> Recommendation {
        let _span = schedule_span!(request.wetness.value(), request.will_be_watered).entered();

        if request.will_be_watered {
            if let Some(interval_days) = request.default_interval_days.filter(|d| *d > 0) {
                match request
                    .reference
                    .checked_add_signed(Duration::days(i64::from(interval_days)))
                {
                    Some(next_check_at) => {
                        tracing::debug!(interval_days, %next_check_at, "fixed watering interval");
                        return Recommendation::DefaultInterval {
                            next_check_at,
                            interval_days,
                        };
                    }
                    None => {
                        tracing::warn!(interval_days, "watering interval out of range, ignoring it");
                    }
                }
            }
        }

        let decay_per_day = match request.decay {
            DecayEstimate::Refined(refined) => refined.refined_per_day,
            DecayEstimate::Unavailable(reason) => {
                tracing::debug!(?reason, "no decay estimate");
                return Recommendation::NotComputable(reason);
            }
        };
        if !(decay_per_day.is_finite() && decay_per_day > 0.0) {
            tracing::debug!(decay_per_day, "refined rate unusable");
            return Recommendation::NotComputable(InsufficientData::UnknownDecayRate);
        }

        let (basis, start) = if request.will_be_watered {
            (DecayBasis::FromSaturation, FULL_SATURATION)
        } else {
            (DecayBasis::FromCurrentReading, request.wetness.as_f64())
        };
        let days_until =
            ((start - self.target_check_wetness) / decay_per_day).max(MINIMUM_CHECK_GAP_DAYS);
        let hours_until = days_until * HOURS_PER_DAY;
        let Some(next_check_at) = hours_to_duration(hours_until)
            .and_then(|until| request.reference.checked_add_signed(until))
        else {
            tracing::debug!(decay_per_day, hours_until, "next check beyond representable dates");
            return Recommendation::NotComputable(InsufficientData::UnknownDecayRate);
        };

        tracing::debug!(?basis, decay_per_day, hours_until, %next_check_at, "decay-based schedule");

        Recommendation::DecayModel {
            next_check_at,
            hours_until,
            decay_per_day,
            basis,
        }
    }
}

impl Default for NextCheckScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Fractional hours at millisecond resolution.
fn hours_to_duration(hours: f64) -> Option<Duration> {
    let millis = (hours * MILLIS_PER_HOUR).round();
    if !(millis.is_finite() && millis.abs() < i64::MAX as f64) {
        return None;
    }
    Duration::try_milliseconds(millis as i64)
}
