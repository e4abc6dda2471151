use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::plant::Wetness;

/// Body of the plant API's full-check endpoint: one check, an optional
/// watering, and the next check reminder, submitted together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FullCheckRequest {
    pub check_date: DateTime<Utc>,
    pub wetness_scale: Wetness,
    pub next_reminder_date: DateTime<Utc>,
    pub watered: bool,
    pub bottom_watered: bool,
    pub notes: String,
}
