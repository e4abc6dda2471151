//! # sprout-schedule
//!
//! Turns a check in progress into the next check date.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`NextCheckScheduler`] | Ordered decision table: fixed interval, then decay model |
//! | [`historical_dryness`] | Backfilled "became dry on…" check for bone-dry readings |
//! | [`CheckDraft`] | Pure state of a check being logged |
//! | [`CheckPlanner`] | Composes estimator, scheduler, and draft into a submission |
//!
//! Nothing here reads the system clock except through an injected
//! [`Clock`](sprout_core::traits::Clock).

pub mod anchor;
pub mod display;
pub mod draft;
pub mod historical_dryness;
pub mod planner;
pub mod recommendation;
pub mod scheduler;

pub use anchor::ScheduleAnchor;
pub use draft::{CheckDraft, WateredIntent};
pub use planner::{CheckPlan, CheckPlanner, CheckSubmission, NextCheckSource};
pub use recommendation::{DecayBasis, Recommendation};
pub use scheduler::{NextCheckScheduler, ScheduleRequest};
