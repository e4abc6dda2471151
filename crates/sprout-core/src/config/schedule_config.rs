use serde::{Deserialize, Serialize};

use super::defaults;

/// Next-check scheduling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Wetness level at which the plant should next be examined.
    pub target_check_wetness: f64,
    /// Days until the next check when no recommendation can be computed.
    pub fallback_interval_days: u32,
    /// Readings at or below this wetness suggest watering until the operator decides.
    pub auto_water_at_or_below: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            target_check_wetness: defaults::DEFAULT_TARGET_CHECK_WETNESS,
            fallback_interval_days: defaults::DEFAULT_FALLBACK_INTERVAL_DAYS,
            auto_water_at_or_below: defaults::DEFAULT_AUTO_WATER_AT_OR_BELOW,
        }
    }
}
