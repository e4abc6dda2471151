use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::plant::Wetness;

/// A logged wetness observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Check {
    #[serde(default)]
    pub id: Option<String>,
    pub plant_id: String,
    pub check_date: DateTime<Utc>,
    pub wetness_scale: Wetness,
    #[serde(default)]
    pub notes: Option<String>,
}
