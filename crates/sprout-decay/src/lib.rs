//! # sprout-decay
//!
//! Linear wetness-decay model. A plant's soil is assumed to lose a fixed
//! number of wetness points per day after watering. Each check refines the
//! stored rate by averaging it with the rate implied by the new reading.

pub mod dryout;
pub mod estimator;
pub mod formula;

pub use dryout::typical_dryout_days;
pub use estimator::DecayEstimator;
