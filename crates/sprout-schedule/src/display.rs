//! Human-facing summaries of a plan.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whole days from `now` until `at`, rounded half up.
pub fn days_until(at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let days = (at - now).num_milliseconds() as f64 / MILLIS_PER_DAY;
    (days + 0.5).floor() as i64
}

pub fn pluralize<'a>(count: i64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// "Next reminder in 3 days".
pub fn reminder_headline(days: i64) -> String {
    format!("Next reminder in {days} {}", pluralize(days, "day", "days"))
}

/// "Typical dryout: 6 days", when a rate is known.
pub fn dryout_label(typical_dryout_days: Option<f64>) -> Option<String> {
    typical_dryout_days.map(|days| {
        let rounded = (days + 0.5).floor() as i64;
        format!("Typical dryout: {rounded} {}", pluralize(rounded, "day", "days"))
    })
}
