use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use sprout_core::models::{DecayEstimate, DecayObservation};
use sprout_core::traits::IDecayEstimator;
use sprout_core::{DecayRate, Wetness};
use sprout_decay::DecayEstimator;

fn refine(prior: f64, hours: i64, wetness: u8) -> DecayEstimate {
    let observed_at = Utc.with_ymd_and_hms(2025, 9, 1, 7, 30, 0).unwrap();
    DecayEstimator::new().refine(&DecayObservation {
        last_watered_at: Some(observed_at - Duration::hours(hours)),
        wetness: Wetness::new(wetness).unwrap(),
        observed_at,
        prior: DecayRate::Known(prior),
    })
}

// ── Refined rate stays positive ─────────────────────────────────────────

proptest! {
    #[test]
    fn refined_rate_is_known_and_positive(
        prior in 0.01f64..20.0,
        hours in -48i64..2000,
        wetness in 0u8..=10,
    ) {
        let estimate = refine(prior, hours, wetness);
        let refined = estimate.refined_per_day();
        prop_assert!(refined.is_some());
        let refined = refined.unwrap();
        prop_assert!(refined.is_finite());
        prop_assert!(refined > 0.0, "refined rate {} not positive", refined);
    }
}

// ── Just watered pulls toward half the prior ────────────────────────────

proptest! {
    #[test]
    fn saturated_reading_yields_half_prior(
        prior in 0.01f64..20.0,
        hours in 1i64..2000,
    ) {
        let refined = refine(prior, hours, 10).refined_per_day().unwrap();
        prop_assert!((refined - prior / 2.0).abs() < 1e-9);
        prop_assert!(refined < prior);
    }
}

// ── Drier readings imply faster decay ───────────────────────────────────

proptest! {
    #[test]
    fn drier_reading_never_slows_decay(
        prior in 0.01f64..20.0,
        hours in 1i64..2000,
        wetter in 1u8..=10,
    ) {
        let drier = wetter - 1;
        let wet_rate = refine(prior, hours, wetter).refined_per_day().unwrap();
        let dry_rate = refine(prior, hours, drier).refined_per_day().unwrap();
        prop_assert!(dry_rate >= wet_rate);
    }
}

// ── Refined lies between prior and observation ──────────────────────────

proptest! {
    #[test]
    fn refined_is_midpoint(
        prior in 0.01f64..20.0,
        hours in 1i64..2000,
        wetness in 0u8..=10,
    ) {
        match refine(prior, hours, wetness) {
            DecayEstimate::Refined(r) => {
                let observed = r.observed_per_day.unwrap();
                let lo = prior.min(observed);
                let hi = prior.max(observed);
                prop_assert!(r.refined_per_day >= lo - 1e-12);
                prop_assert!(r.refined_per_day <= hi + 1e-12);
            }
            DecayEstimate::Unavailable(reason) => {
                prop_assert!(false, "unexpected unavailable: {:?}", reason);
            }
        }
    }
}
