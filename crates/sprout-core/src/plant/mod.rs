//! Plant-care value types: wetness readings and decay rates.

mod decay_rate;
mod numeric;
mod wetness;

pub use decay_rate::DecayRate;
pub use wetness::{Wetness, WetnessBand};
