use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sprout_core::InsufficientData;

/// Which wetness the decay model counted down from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayBasis {
    /// The plant is being watered: count down from saturation.
    FromSaturation,
    /// Not watered: count down from the current reading.
    FromCurrentReading,
}

/// Result of the scheduling decision table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    /// The plant's fixed watering interval applies.
    DefaultInterval {
        next_check_at: DateTime<Utc>,
        interval_days: u32,
    },
    /// Predicted from the refined decay rate.
    DecayModel {
        next_check_at: DateTime<Utc>,
        hours_until: f64,
        decay_per_day: f64,
        basis: DecayBasis,
    },
    /// No recommendation; the caller falls back to a default or asks for a date.
    NotComputable(InsufficientData),
}

impl Recommendation {
    pub fn next_check_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DefaultInterval { next_check_at, .. } | Self::DecayModel { next_check_at, .. } => {
                Some(*next_check_at)
            }
            Self::NotComputable(_) => None,
        }
    }

    pub fn is_computable(&self) -> bool {
        !matches!(self, Self::NotComputable(_))
    }
}
