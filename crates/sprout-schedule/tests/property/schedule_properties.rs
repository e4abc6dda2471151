use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use sprout_core::models::{DecayEstimate, InsufficientData, RefinedDecay};
use sprout_core::traits::FixedClock;
use sprout_core::Wetness;
use sprout_schedule::{CheckDraft, CheckPlanner, NextCheckScheduler, Recommendation, ScheduleRequest};
use test_fixtures::snapshot_at;

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 10, 12, 0, 0).unwrap()
}

fn refined(rate: f64) -> DecayEstimate {
    DecayEstimate::Refined(RefinedDecay {
        prior_per_day: rate,
        observed_per_day: None,
        days_since_watering: 0.0,
        refined_per_day: rate,
    })
}

fn request(wetness: u8, will_be_watered: bool, interval: Option<u32>, rate: f64) -> ScheduleRequest {
    ScheduleRequest {
        wetness: Wetness::new(wetness).unwrap(),
        will_be_watered,
        default_interval_days: interval,
        decay: refined(rate),
        reference: reference(),
    }
}

// ── Monotonic in wetness ────────────────────────────────────────────────

proptest! {
    #[test]
    fn wetter_reading_never_schedules_earlier(
        low in 0u8..=10,
        high in 0u8..=10,
        rate in 0.05f64..10.0,
    ) {
        prop_assume!(low <= high);
        let scheduler = NextCheckScheduler::new();
        let dry = scheduler.schedule(&request(low, false, None, rate)).next_check_at();
        let wet = scheduler.schedule(&request(high, false, None, rate)).next_check_at();
        prop_assert!(dry.unwrap() <= wet.unwrap());
    }
}

// ── One-day floor ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn decay_schedule_is_at_least_a_day_out(
        wetness in 0u8..=10,
        will_be_watered: bool,
        rate in 0.01f64..1000.0,
    ) {
        let recommendation = NextCheckScheduler::new()
            .schedule(&request(wetness, will_be_watered, None, rate));
        let is_decay_model = matches!(recommendation, Recommendation::DecayModel { .. });
        prop_assert!(is_decay_model);
        let next = recommendation.next_check_at().unwrap();
        prop_assert!(next - reference() >= Duration::hours(24));
    }
}

// ── Fixed interval wins when watering ───────────────────────────────────

proptest! {
    #[test]
    fn interval_takes_precedence_over_decay(
        wetness in 0u8..=10,
        interval in 1u32..365,
        rate in 0.01f64..10.0,
        unavailable: bool,
    ) {
        let mut req = request(wetness, true, Some(interval), rate);
        if unavailable {
            req.decay = DecayEstimate::Unavailable(InsufficientData::NeverWatered);
        }
        let recommendation = NextCheckScheduler::new().schedule(&req);
        prop_assert_eq!(
            recommendation,
            Recommendation::DefaultInterval {
                next_check_at: reference() + Duration::days(i64::from(interval)),
                interval_days: interval,
            }
        );
    }
}

// ── Never watered ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn never_watered_is_not_computable(
        wetness in 0u8..=10,
        watered: bool,
        rate in 0.01f64..10.0,
    ) {
        let clock = FixedClock(reference());
        let mut draft = CheckDraft::new(snapshot_at(reference(), None, rate, None), &clock);
        draft.wetness = Wetness::new(wetness).unwrap();
        draft.set_watered(watered);

        let plan = CheckPlanner::default().plan(&draft, &clock).unwrap();
        prop_assert_eq!(
            plan.recommendation,
            Recommendation::NotComputable(InsufficientData::NeverWatered)
        );
        prop_assert!(plan.next_check_at > plan.reference);
    }
}
