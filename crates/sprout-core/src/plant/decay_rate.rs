use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::numeric::NumberOrString;
use crate::errors::SproutError;

/// Rate at which the wetness scale drops per day after watering.
///
/// A stored rate of zero means the plant has no usable history. That case is
/// `Unknown` rather than a numeric zero so it can never be mistaken for a
/// measured rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DecayRate {
    Known(f64),
    #[default]
    Unknown,
}

impl DecayRate {
    /// Zero, negative, and non-finite values map to `Unknown`.
    pub fn from_per_day(per_day: f64) -> Self {
        if per_day.is_finite() && per_day > 0.0 {
            Self::Known(per_day)
        } else {
            Self::Unknown
        }
    }

    pub fn per_day(self) -> Option<f64> {
        match self {
            Self::Known(rate) => Some(rate),
            Self::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Wire value: the API stores an unknown rate as `0`.
    pub fn to_wire(self) -> f64 {
        self.per_day().unwrap_or(0.0)
    }
}

impl fmt::Display for DecayRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(rate) => write!(f, "{rate:.3}/day"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for DecayRate {
    type Err = SproutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let per_day = s
            .trim()
            .parse::<f64>()
            .map_err(|e| SproutError::InvalidDecayRate {
                raw: s.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_per_day(per_day))
    }
}

impl Serialize for DecayRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for DecayRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let per_day = NumberOrString::deserialize(deserializer)?
            .into_f64()
            .map_err(serde::de::Error::custom)?;
        Ok(Self::from_per_day(per_day))
    }
}
