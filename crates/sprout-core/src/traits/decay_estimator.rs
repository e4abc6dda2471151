use crate::models::{DecayEstimate, DecayObservation};

/// Decay-rate refinement from a single wetness observation.
pub trait IDecayEstimator {
    fn refine(&self, observation: &DecayObservation) -> DecayEstimate;
}
