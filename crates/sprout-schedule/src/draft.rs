use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sprout_core::constants::{DEFAULT_DRAFT_WETNESS, QUICK_WATER_WETNESS};
use sprout_core::traits::Clock;
use sprout_core::{PlantSnapshot, Wetness};

use crate::anchor::ScheduleAnchor;
use crate::planner::CheckPlan;

/// Whether the plant will be watered as part of this check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum WateredIntent {
    /// Not decided yet: follows the reading (see [`CheckDraft::will_be_watered`]).
    #[default]
    Suggested,
    /// Set by the operator; no longer follows the reading.
    Explicit(bool),
}

/// A check being logged, before submission.
///
/// Holds only operator choices. Everything derived from them is produced by
/// [`CheckPlanner::plan`](crate::CheckPlanner::plan) on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckDraft {
    pub snapshot: PlantSnapshot,
    pub wetness: Wetness,
    pub watered: WateredIntent,
    /// Only submitted when the plant is watered.
    pub bottom_watered: bool,
    pub notes: String,
    /// When the check occurred. Earlier than now when backfilling.
    pub observed_at: DateTime<Utc>,
    pub anchor: ScheduleAnchor,
    /// Operator's estimate of when a bone-dry plant actually dried out.
    pub historical_dry_at: Option<DateTime<Utc>>,
    /// A next-check date picked by hand. Wins over any recommendation.
    pub next_check_override: Option<DateTime<Utc>>,
}

impl CheckDraft {
    pub fn new(snapshot: PlantSnapshot, clock: &impl Clock) -> Self {
        Self {
            snapshot,
            wetness: Wetness::saturating(i64::from(DEFAULT_DRAFT_WETNESS)),
            watered: WateredIntent::Suggested,
            bottom_watered: false,
            notes: String::new(),
            observed_at: clock.now(),
            anchor: ScheduleAnchor::Observation,
            historical_dry_at: None,
            next_check_override: None,
        }
    }

    /// A check for a plant that is about to be watered.
    pub fn quick_water(snapshot: PlantSnapshot, clock: &impl Clock) -> Self {
        Self {
            wetness: Wetness::saturating(i64::from(QUICK_WATER_WETNESS)),
            watered: WateredIntent::Explicit(true),
            ..Self::new(snapshot, clock)
        }
    }

    pub fn set_watered(&mut self, watered: bool) {
        self.watered = WateredIntent::Explicit(watered);
    }

    /// The effective watering decision.
    ///
    /// Until the operator decides, readings at or below `auto_water_at_or_below`
    /// suggest watering.
    pub fn will_be_watered(&self, auto_water_at_or_below: u8) -> bool {
        match self.watered {
            WateredIntent::Explicit(watered) => watered,
            WateredIntent::Suggested => self.wetness.value() <= auto_water_at_or_below,
        }
    }

    pub fn set_next_check(&mut self, at: DateTime<Utc>) {
        self.next_check_override = Some(at);
    }

    /// Return to the computed next-check date.
    pub fn clear_next_check(&mut self) {
        self.next_check_override = None;
    }

    /// Shift the plan's next-check date by whole days and pin it.
    ///
    /// A shift past the representable range pins the unshifted date.
    pub fn nudge_next_check(&mut self, plan: &CheckPlan, days: i64) {
        let shifted = Duration::try_days(days)
            .and_then(|delta| plan.next_check_at.checked_add_signed(delta))
            .unwrap_or(plan.next_check_at);
        self.next_check_override = Some(shifted);
    }
}
