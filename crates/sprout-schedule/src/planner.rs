//! CheckPlanner: runs refinement and scheduling for a draft and assembles
//! the records the plant API expects.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sprout_core::config::ScheduleConfig;
use sprout_core::errors::SproutResult;
use sprout_core::traits::{Clock, IDecayEstimator};
use sprout_core::{Check, DecayEstimate, DecayObservation, DecayRate, FullCheckRequest};
use sprout_decay::{typical_dryout_days, DecayEstimator};
use sprout_observability::{check_plan_span, decay_span};

use crate::display;
use crate::draft::CheckDraft;
use crate::historical_dryness;
use crate::recommendation::Recommendation;
use crate::scheduler::{NextCheckScheduler, ScheduleRequest};

/// Where the effective next-check date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextCheckSource {
    Manual,
    Recommended,
    /// No recommendation was possible: `now + fallback_interval_days`.
    Fallback,
}

/// The records to hand to the plant API. Two distinct check events when a
/// historical dry date was given.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSubmission {
    pub request: FullCheckRequest,
    pub historical_check: Option<Check>,
}

/// Everything derived from a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckPlan {
    pub will_be_watered: bool,
    /// Instant the schedule counts from.
    pub reference: DateTime<Utc>,
    /// Instant the decay estimate was taken at.
    pub decay_observed_at: DateTime<Utc>,
    pub estimate: DecayEstimate,
    pub recommendation: Recommendation,
    pub next_check_at: DateTime<Utc>,
    pub next_check_source: NextCheckSource,
    /// From the plant's stored rate, not the refined one.
    pub typical_dryout_days: Option<f64>,
    /// Whole days from now until `next_check_at`.
    pub reminder_in_days: i64,
    pub submission: CheckSubmission,
}

impl CheckPlan {
    /// Rate to persist back to the plant. `Unknown` when no estimate was possible.
    pub fn refined_rate(&self) -> DecayRate {
        self.estimate
            .refined_per_day()
            .map_or(DecayRate::Unknown, DecayRate::from_per_day)
    }

    pub fn headline(&self) -> String {
        display::reminder_headline(self.reminder_in_days)
    }

    pub fn dryout_label(&self) -> Option<String> {
        display::dryout_label(self.typical_dryout_days)
    }
}

/// Plans checks with a decay estimator and the next-check scheduler.
pub struct CheckPlanner<E: IDecayEstimator = DecayEstimator> {
    estimator: E,
    scheduler: NextCheckScheduler,
    config: ScheduleConfig,
}

impl CheckPlanner<DecayEstimator> {
    pub fn new(config: &ScheduleConfig) -> Self {
        Self::with_estimator(config, DecayEstimator::new())
    }
}

impl Default for CheckPlanner<DecayEstimator> {
    fn default() -> Self {
        Self::new(&ScheduleConfig::default())
    }
}

impl<E: IDecayEstimator> CheckPlanner<E> {
    pub fn with_estimator(config: &ScheduleConfig, estimator: E) -> Self {
        Self {
            estimator,
            scheduler: NextCheckScheduler::from_config(config),
            config: config.clone(),
        }
    }

    pub fn scheduler(&self) -> &NextCheckScheduler {
        &self.scheduler
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Derive the full plan for `draft`.
    ///
    /// Fails only when a historical dry date contradicts the plant's history.
    pub fn plan(&self, draft: &CheckDraft, clock: &impl Clock) -> SproutResult<CheckPlan> {
        let snapshot = &draft.snapshot;
        let _span = check_plan_span!(snapshot.plant.id).entered();
        let now = clock.now();
        let last_watered_at = snapshot.last_watered_at();

        let historical_check = historical_dryness::historical_check(
            &snapshot.plant.id,
            draft.wetness,
            draft.historical_dry_at,
            draft.observed_at,
            last_watered_at,
        )?;

        let decay_observed_at = historical_dryness::decay_observation_instant(
            draft.wetness,
            draft.observed_at,
            draft.historical_dry_at,
        );
        let estimate = {
            let _decay = decay_span!(snapshot.plant.id).entered();
            self.estimator.refine(&DecayObservation {
                last_watered_at,
                wetness: draft.wetness,
                observed_at: decay_observed_at,
                prior: snapshot.wetness_decay_per_day,
            })
        };

        let will_be_watered = draft.will_be_watered(self.config.auto_water_at_or_below);
        let reference = draft.anchor.resolve(draft.observed_at, now);
        let recommendation = self.scheduler.schedule(&ScheduleRequest {
            wetness: draft.wetness,
            will_be_watered,
            default_interval_days: snapshot.plant.watering_interval(),
            decay: estimate,
            reference,
        });

        let (next_check_at, next_check_source) = match (
            draft.next_check_override,
            recommendation.next_check_at(),
        ) {
            (Some(manual), _) => (manual, NextCheckSource::Manual),
            (None, Some(recommended)) => (recommended, NextCheckSource::Recommended),
            (None, None) => (
                now.checked_add_signed(Duration::days(i64::from(
                    self.config.fallback_interval_days,
                )))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
                NextCheckSource::Fallback,
            ),
        };

        tracing::info!(
            will_be_watered,
            ?next_check_source,
            %next_check_at,
            historical = historical_check.is_some(),
            "check planned"
        );

        Ok(CheckPlan {
            will_be_watered,
            reference,
            decay_observed_at,
            estimate,
            recommendation,
            next_check_at,
            next_check_source,
            typical_dryout_days: typical_dryout_days(snapshot.wetness_decay_per_day),
            reminder_in_days: display::days_until(next_check_at, now),
            submission: CheckSubmission {
                request: FullCheckRequest {
                    check_date: draft.observed_at,
                    wetness_scale: draft.wetness,
                    next_reminder_date: next_check_at,
                    watered: will_be_watered,
                    bottom_watered: will_be_watered && draft.bottom_watered,
                    notes: draft.notes.clone(),
                },
                historical_check,
            },
        })
    }
}
