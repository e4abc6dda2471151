use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    Check,
    Repot,
    Prune,
}

/// A scheduled future action for a plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reminder {
    pub plant_id: String,
    pub reminder_date: DateTime<Utc>,
    pub reminder_type: ReminderType,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Reminder {
    pub fn check(plant_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            plant_id: plant_id.into(),
            reminder_date: at,
            reminder_type: ReminderType::Check,
            notes: None,
        }
    }
}
