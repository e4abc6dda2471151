use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plant::{DecayRate, Wetness};

/// Input to decay refinement: one wetness reading against the last watering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayObservation {
    /// `None` when the plant has never been watered.
    pub last_watered_at: Option<DateTime<Utc>>,
    pub wetness: Wetness,
    /// When the reading applies. Usually now; earlier when backfilling.
    pub observed_at: DateTime<Utc>,
    /// The plant's previously known rate.
    pub prior: DecayRate,
}

/// Why a decay-based prediction cannot be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsufficientData {
    NeverWatered,
    UnknownDecayRate,
}

/// A refined rate with each intermediate value, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinedDecay {
    pub prior_per_day: f64,
    /// Rate implied by this reading alone. `None` when the reading is not
    /// after the watering, in which case the prior is kept.
    pub observed_per_day: Option<f64>,
    /// Zero when `observed_per_day` is `None`.
    pub days_since_watering: f64,
    pub refined_per_day: f64,
}

impl RefinedDecay {
    pub fn rate(&self) -> DecayRate {
        DecayRate::from_per_day(self.refined_per_day)
    }
}

/// Outcome of decay refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecayEstimate {
    Refined(RefinedDecay),
    Unavailable(InsufficientData),
}

impl DecayEstimate {
    /// The refined rate, or `None` when no prediction is possible.
    pub fn refined_per_day(&self) -> Option<f64> {
        match self {
            Self::Refined(refined) => Some(refined.refined_per_day),
            Self::Unavailable(_) => None,
        }
    }
}
