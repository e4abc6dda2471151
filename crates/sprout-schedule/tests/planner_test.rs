use chrono::{DateTime, Duration, TimeZone, Utc};
use sprout_core::config::ScheduleConfig;
use sprout_core::errors::{CheckError, SproutError};
use sprout_core::models::{DecayEstimate, DecayObservation, InsufficientData};
use sprout_core::traits::{FixedClock, IDecayEstimator};
use sprout_core::{DecayRate, Wetness};
use sprout_schedule::*;
use test_fixtures::snapshot_at;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 10, 12, 0, 0).unwrap()
}

fn clock() -> FixedClock {
    FixedClock(now())
}

fn wetness(v: u8) -> Wetness {
    Wetness::new(v).unwrap()
}

// ── Draft defaults ──────────────────────────────────────────────────────

#[test]
fn new_draft_starts_at_three_observed_now() {
    let draft = CheckDraft::new(snapshot_at(now(), Some(48), 1.0, None), &clock());
    assert_eq!(draft.wetness, wetness(3));
    assert_eq!(draft.watered, WateredIntent::Suggested);
    assert_eq!(draft.observed_at, now());
    assert_eq!(draft.anchor, ScheduleAnchor::Observation);
    assert!(draft.historical_dry_at.is_none());
    assert!(draft.next_check_override.is_none());
    assert!(!draft.will_be_watered(1));
}

#[test]
fn quick_water_draft_is_watered_at_one() {
    let draft = CheckDraft::quick_water(snapshot_at(now(), Some(48), 1.0, None), &clock());
    assert_eq!(draft.wetness, wetness(1));
    assert_eq!(draft.watered, WateredIntent::Explicit(true));
    assert!(draft.will_be_watered(1));
}

#[test]
fn watering_suggestion_follows_reading_until_set() {
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(48), 1.0, None), &clock());
    draft.wetness = wetness(1);
    assert!(draft.will_be_watered(1));
    draft.wetness = wetness(2);
    assert!(!draft.will_be_watered(1));
    assert!(draft.will_be_watered(2));

    draft.wetness = wetness(0);
    draft.set_watered(false);
    assert!(!draft.will_be_watered(1));
}

// ── Planning ────────────────────────────────────────────────────────────

#[test]
fn plan_for_concrete_scenario() {
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(96), 1.0, None), &clock());
    draft.wetness = wetness(6);
    draft.set_watered(false);

    let plan = CheckPlanner::default().plan(&draft, &clock()).unwrap();

    assert_eq!(plan.estimate.refined_per_day(), Some(1.0));
    assert_eq!(plan.refined_rate(), DecayRate::Known(1.0));
    assert_eq!(plan.next_check_at, now() + Duration::hours(108));
    assert_eq!(plan.next_check_source, NextCheckSource::Recommended);
    assert_eq!(plan.reminder_in_days, 5);
    assert_eq!(plan.headline(), "Next reminder in 5 days");
    assert_eq!(plan.typical_dryout_days, Some(9.0));
    assert_eq!(plan.dryout_label().as_deref(), Some("Typical dryout: 9 days"));

    let request = &plan.submission.request;
    assert_eq!(request.check_date, now());
    assert_eq!(request.wetness_scale, wetness(6));
    assert_eq!(request.next_reminder_date, plan.next_check_at);
    assert!(!request.watered);
    assert!(plan.submission.historical_check.is_none());
}

#[test]
fn historical_dry_date_shortens_decay_span() {
    // Watered six days ago, dried out two days ago: four-day span.
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(6 * 24), 1.0, None), &clock());
    draft.wetness = Wetness::BONE_DRY;
    draft.historical_dry_at = Some(now() - Duration::days(2));

    let plan = CheckPlanner::default().plan(&draft, &clock()).unwrap();

    assert_eq!(plan.decay_observed_at, now() - Duration::days(2));
    match plan.estimate {
        DecayEstimate::Refined(r) => {
            assert_eq!(r.days_since_watering, 4.0);
            assert_eq!(r.observed_per_day, Some(2.5));
            assert_eq!(r.refined_per_day, 1.75);
        }
        other => panic!("expected refinement, got {other:?}"),
    }

    // Two distinct events: the real check now, the historical one earlier.
    assert_eq!(plan.submission.request.check_date, now());
    let historical = plan.submission.historical_check.as_ref().unwrap();
    assert_eq!(historical.check_date, now() - Duration::days(2));
    assert_eq!(historical.wetness_scale, Wetness::BONE_DRY);
}

#[test]
fn bone_dry_without_dry_date_uses_full_span() {
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(6 * 24), 1.0, None), &clock());
    draft.wetness = Wetness::BONE_DRY;

    let plan = CheckPlanner::default().plan(&draft, &clock()).unwrap();
    match plan.estimate {
        DecayEstimate::Refined(r) => assert_eq!(r.days_since_watering, 6.0),
        other => panic!("expected refinement, got {other:?}"),
    }
    assert!(plan.submission.historical_check.is_none());
}

#[test]
fn invalid_dry_date_fails_the_plan() {
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(24), 1.0, None), &clock());
    draft.wetness = Wetness::BONE_DRY;
    draft.historical_dry_at = Some(now() - Duration::days(3));

    let err = CheckPlanner::default().plan(&draft, &clock()).unwrap_err();
    assert!(matches!(
        err,
        SproutError::CheckError(CheckError::DryDateBeforeWatering { .. })
    ));
}

#[test]
fn never_watered_falls_back_to_configured_interval() {
    let config = ScheduleConfig {
        fallback_interval_days: 4,
        ..ScheduleConfig::default()
    };
    let mut draft = CheckDraft::new(snapshot_at(now(), None, 1.0, None), &clock());
    draft.wetness = wetness(5);

    let plan = CheckPlanner::new(&config).plan(&draft, &clock()).unwrap();
    assert_eq!(
        plan.recommendation,
        Recommendation::NotComputable(InsufficientData::NeverWatered)
    );
    assert_eq!(plan.next_check_source, NextCheckSource::Fallback);
    assert_eq!(plan.next_check_at, now() + Duration::days(4));
    assert_eq!(plan.refined_rate(), DecayRate::Unknown);
    assert_ne!(plan.next_check_at, plan.reference);
}

#[test]
fn unknown_stored_rate_has_no_dryout() {
    let draft = CheckDraft::new(snapshot_at(now(), Some(48), 0.0, None), &clock());
    let plan = CheckPlanner::default().plan(&draft, &clock()).unwrap();
    assert_eq!(plan.typical_dryout_days, None);
    assert_eq!(plan.dryout_label(), None);
    assert_eq!(
        plan.recommendation,
        Recommendation::NotComputable(InsufficientData::UnknownDecayRate)
    );
}

#[test]
fn manual_date_wins_and_nudges_shift_it() {
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(96), 1.0, None), &clock());
    draft.wetness = wetness(6);
    let planner = CheckPlanner::default();

    let plan = planner.plan(&draft, &clock()).unwrap();
    draft.nudge_next_check(&plan, 1);
    let nudged = planner.plan(&draft, &clock()).unwrap();
    assert_eq!(nudged.next_check_source, NextCheckSource::Manual);
    assert_eq!(nudged.next_check_at, plan.next_check_at + Duration::days(1));

    draft.nudge_next_check(&nudged, -2);
    let back = planner.plan(&draft, &clock()).unwrap();
    assert_eq!(back.next_check_at, plan.next_check_at - Duration::days(1));
    assert_eq!(back.submission.request.next_reminder_date, back.next_check_at);

    draft.clear_next_check();
    let cleared = planner.plan(&draft, &clock()).unwrap();
    assert_eq!(cleared.next_check_source, NextCheckSource::Recommended);
    assert_eq!(cleared.next_check_at, plan.next_check_at);

    let pinned = now() + Duration::days(10);
    draft.set_next_check(pinned);
    assert_eq!(planner.plan(&draft, &clock()).unwrap().next_check_at, pinned);
}

#[test]
fn backdated_check_anchors_to_observation_by_default() {
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(6 * 24), 1.0, None), &clock());
    draft.wetness = wetness(5);
    draft.set_watered(false);
    draft.observed_at = now() - Duration::days(2);

    let planner = CheckPlanner::default();
    let from_observation = planner.plan(&draft, &clock()).unwrap();
    assert_eq!(from_observation.reference, draft.observed_at);

    draft.anchor = ScheduleAnchor::Now;
    let from_now = planner.plan(&draft, &clock()).unwrap();
    assert_eq!(from_now.reference, now());
    assert_eq!(
        from_now.next_check_at - from_observation.next_check_at,
        Duration::days(2)
    );
    // Decay is still measured at the observation, not at now.
    assert_eq!(from_now.estimate, from_observation.estimate);
    assert_eq!(from_now.submission.request.check_date, draft.observed_at);
}

#[test]
fn fixed_interval_applies_to_quick_water() {
    let draft = CheckDraft::quick_water(snapshot_at(now(), Some(48), 1.0, Some(8)), &clock());
    let plan = CheckPlanner::default().plan(&draft, &clock()).unwrap();
    assert_eq!(
        plan.recommendation,
        Recommendation::DefaultInterval {
            next_check_at: now() + Duration::days(8),
            interval_days: 8,
        }
    );
    assert!(plan.submission.request.watered);
}

#[test]
fn bottom_watering_only_submitted_with_watering() {
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(48), 1.0, None), &clock());
    draft.bottom_watered = true;
    draft.set_watered(false);
    let planner = CheckPlanner::default();
    assert!(!planner.plan(&draft, &clock()).unwrap().submission.request.bottom_watered);

    draft.set_watered(true);
    assert!(planner.plan(&draft, &clock()).unwrap().submission.request.bottom_watered);
}

#[test]
fn notes_are_carried_to_submission() {
    let mut draft = CheckDraft::new(snapshot_at(now(), Some(48), 1.0, None), &clock());
    draft.notes = "New leaf unfurling".to_string();
    let plan = CheckPlanner::default().plan(&draft, &clock()).unwrap();
    assert_eq!(plan.submission.request.notes, "New leaf unfurling");
}

#[test]
fn configured_auto_water_threshold_drives_suggestion() {
    let config = ScheduleConfig {
        auto_water_at_or_below: 3,
        ..ScheduleConfig::default()
    };
    let draft = CheckDraft::new(snapshot_at(now(), Some(48), 1.0, None), &clock());
    let plan = CheckPlanner::new(&config).plan(&draft, &clock()).unwrap();
    assert!(plan.will_be_watered);
}

// ── Pluggable estimator ─────────────────────────────────────────────────

struct RecordingEstimator(std::cell::RefCell<Vec<DecayObservation>>);

impl IDecayEstimator for RecordingEstimator {
    fn refine(&self, observation: &DecayObservation) -> DecayEstimate {
        self.0.borrow_mut().push(*observation);
        DecayEstimate::Unavailable(InsufficientData::UnknownDecayRate)
    }
}

#[test]
fn planner_feeds_the_estimator_the_decay_instant() {
    let estimator = RecordingEstimator(Default::default());
    let planner = CheckPlanner::with_estimator(&ScheduleConfig::default(), estimator);

    let mut draft = CheckDraft::new(snapshot_at(now(), Some(6 * 24), 1.3, None), &clock());
    draft.wetness = Wetness::BONE_DRY;
    draft.historical_dry_at = Some(now() - Duration::days(1));
    let plan = planner.plan(&draft, &clock()).unwrap();

    let seen = planner_observations(&planner);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].observed_at, now() - Duration::days(1));
    assert_eq!(seen[0].last_watered_at, Some(now() - Duration::days(6)));
    assert_eq!(seen[0].prior, DecayRate::Known(1.3));

    // Watering suggested at 0, no interval, estimator gave up: fallback.
    assert!(plan.will_be_watered);
    assert_eq!(plan.next_check_source, NextCheckSource::Fallback);
}

fn planner_observations(planner: &CheckPlanner<RecordingEstimator>) -> Vec<DecayObservation> {
    planner.estimator().0.borrow().clone()
}
