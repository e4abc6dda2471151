use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The instant the next check is counted from.
///
/// Only differs in effect when a check is backdated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleAnchor {
    /// From when the check occurred.
    #[default]
    Observation,
    /// From the current instant.
    Now,
}

impl ScheduleAnchor {
    pub fn resolve(self, observed_at: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Observation => observed_at,
            Self::Now => now,
        }
    }
}
