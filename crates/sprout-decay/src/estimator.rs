use sprout_core::models::{DecayEstimate, DecayObservation, InsufficientData, RefinedDecay};
use sprout_core::traits::IDecayEstimator;

use crate::formula;

/// Refines a plant's decay rate from one wetness reading.
///
/// ```text
/// observed = (10 - wetness) / days_since_watering
/// refined  = (prior + observed) / 2
/// ```
///
/// A plant that was never watered, or has no known prior rate, yields
/// [`DecayEstimate::Unavailable`]. A reading taken less than an hour after
/// watering carries no dry-out signal and leaves the prior unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayEstimator;

impl DecayEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl IDecayEstimator for DecayEstimator {
    fn refine(&self, observation: &DecayObservation) -> DecayEstimate {
        let Some(watered_at) = observation.last_watered_at else {
            tracing::debug!("no watering on record, decay unavailable");
            return DecayEstimate::Unavailable(InsufficientData::NeverWatered);
        };
        let Some(prior) = observation.prior.per_day() else {
            tracing::debug!("no prior decay rate, decay unavailable");
            return DecayEstimate::Unavailable(InsufficientData::UnknownDecayRate);
        };

        let Some(days) = formula::days_since_watering(watered_at, observation.observed_at) else {
            tracing::debug!(
                %watered_at,
                observed_at = %observation.observed_at,
                "observation too close to watering, keeping prior rate"
            );
            return DecayEstimate::Refined(RefinedDecay {
                prior_per_day: prior,
                observed_per_day: None,
                days_since_watering: 0.0,
                refined_per_day: prior,
            });
        };

        let observed = formula::observed_rate(observation.wetness, days);
        let refined = formula::refine(prior, observed);

        tracing::trace!(
            prior,
            observed,
            days_since_watering = days,
            refined,
            wetness = observation.wetness.value(),
            "decay refined"
        );

        DecayEstimate::Refined(RefinedDecay {
            prior_per_day: prior,
            observed_per_day: Some(observed),
            days_since_watering: days,
            refined_per_day: refined,
        })
    }
}
