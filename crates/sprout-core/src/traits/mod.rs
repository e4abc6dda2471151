//! Seams between the engine and its callers.

mod clock;
mod decay_estimator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use decay_estimator::IDecayEstimator;
