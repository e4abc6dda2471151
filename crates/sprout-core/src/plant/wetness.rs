use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::numeric::NumberOrString;
use crate::errors::{SproutError, SproutResult};
use crate::models::Check;

/// Soil wetness on the 0 (bone dry) to 10 (fully saturated) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Wetness(u8);

impl Wetness {
    pub const BONE_DRY: Wetness = Wetness(0);
    pub const SATURATED: Wetness = Wetness(10);

    /// Create a reading, rejecting values above 10.
    pub fn new(value: u8) -> SproutResult<Self> {
        if value > Self::SATURATED.0 {
            return Err(SproutError::WetnessOutOfRange {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Create a reading, clamping to [0, 10].
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::SATURATED.0)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    pub fn is_bone_dry(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Wetness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Wetness {
    type Error = SproutError;

    fn try_from(value: u8) -> SproutResult<Self> {
        Self::new(value)
    }
}

impl From<Wetness> for u8 {
    fn from(w: Wetness) -> Self {
        w.0
    }
}

impl<'de> Deserialize<'de> for Wetness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = NumberOrString::deserialize(deserializer)?
            .into_f64()
            .map_err(serde::de::Error::custom)?;
        if raw.fract() != 0.0 || !(0.0..=10.0).contains(&raw) {
            return Err(serde::de::Error::custom(format!(
                "wetness {raw} is not an integer in 0..=10"
            )));
        }
        Ok(Self(raw as u8))
    }
}

/// Badge classification of a plant's most recent check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WetnessBand {
    /// Never checked.
    Unchecked,
    /// Wetness above 5.
    Wet,
    /// Wetness above 2, up to 5.
    Damp,
    /// Wetness 2 or below.
    Dry,
}

impl WetnessBand {
    pub fn of_reading(wetness: Wetness) -> Self {
        match wetness.value() {
            6..=u8::MAX => Self::Wet,
            3..=5 => Self::Damp,
            _ => Self::Dry,
        }
    }

    pub fn of_last_check(last_check: Option<&Check>) -> Self {
        last_check
            .map(|check| Self::of_reading(check.wetness_scale))
            .unwrap_or(Self::Unchecked)
    }
}
