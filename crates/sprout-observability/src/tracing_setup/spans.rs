//! Span definitions per operation: decay refinement, scheduling, check planning.

/// Create a check-planning span.
#[macro_export]
macro_rules! check_plan_span {
    ($plant_id:expr) => {
        tracing::info_span!("sprout.check_plan", plant_id = %$plant_id)
    };
}

/// Create a scheduling span.
#[macro_export]
macro_rules! schedule_span {
    ($wetness:expr, $will_be_watered:expr) => {
        tracing::debug_span!(
            "sprout.schedule",
            wetness = $wetness,
            will_be_watered = $will_be_watered
        )
    };
}

/// Create a decay refinement span.
#[macro_export]
macro_rules! decay_span {
    ($plant_id:expr) => {
        tracing::debug_span!("sprout.decay", plant_id = %$plant_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CHECK_PLAN: &str = "sprout.check_plan";
    pub const SCHEDULE: &str = "sprout.schedule";
    pub const DECAY: &str = "sprout.decay";
}
