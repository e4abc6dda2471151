use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::plant::Wetness;

/// A logged watering event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Watering {
    #[serde(default)]
    pub id: Option<String>,
    pub plant_id: String,
    pub watering_date: DateTime<Utc>,
    /// How wet the soil was made.
    pub saturation_scale: Wetness,
    #[serde(default)]
    pub bottom_watered: bool,
    #[serde(default)]
    pub notes: Option<String>,
}
