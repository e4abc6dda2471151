use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Check, Watering};
use crate::plant::DecayRate;

/// A tracked plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// Fixed watering schedule in days. `None` and `Some(0)` both mean unset.
    #[serde(default)]
    pub default_watering_interval_days: Option<u32>,
}

impl Plant {
    /// The per-plant watering interval, if one is set.
    pub fn watering_interval(&self) -> Option<u32> {
        self.default_watering_interval_days.filter(|days| *days > 0)
    }
}

/// Read-only view of a plant and its latest history, as served by the plant API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSnapshot {
    pub plant: Plant,
    #[serde(default)]
    pub last_watering: Option<Watering>,
    #[serde(default)]
    pub last_check: Option<Check>,
    /// Decay rate computed by the plant service from historical checks.
    #[serde(default)]
    pub wetness_decay_per_day: DecayRate,
}

impl PlantSnapshot {
    pub fn last_watered_at(&self) -> Option<DateTime<Utc>> {
        self.last_watering.as_ref().map(|w| w.watering_date)
    }
}
