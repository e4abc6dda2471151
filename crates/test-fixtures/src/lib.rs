//! Test fixture loader for Sprout golden scenarios, plus builders for plant
//! history snapshots.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sprout_core::{DecayRate, Plant, PlantSnapshot, Watering, Wetness};

/// Root directory of the golden fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Load every check scenario.
pub fn check_scenarios() -> Vec<CheckScenario> {
    load_fixture::<CheckScenarioFile>("check_scenarios.json").scenarios
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckScenarioFile {
    pub scenarios: Vec<CheckScenario>,
}

/// One end-to-end check: plant history, operator input, and expected plan.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckScenario {
    pub name: String,
    pub now: DateTime<Utc>,
    pub snapshot: PlantSnapshot,
    pub draft: ScenarioDraft,
    pub expected: ScenarioExpectation,
}

/// Operator input. Absent fields keep the draft defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioDraft {
    pub wetness: Wetness,
    /// `None` leaves the watering decision to the suggestion.
    #[serde(default)]
    pub watered: Option<bool>,
    #[serde(default)]
    pub bottom_watered: bool,
    #[serde(default)]
    pub notes: String,
    /// Defaults to the scenario's `now`.
    #[serde(default)]
    pub observed_at: Option<DateTime<Utc>>,
    /// "observation" or "now".
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub historical_dry_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    pub next_check_at: DateTime<Utc>,
    /// "manual", "recommended", or "fallback".
    pub source: String,
    pub will_be_watered: bool,
    pub refined_decay_per_day: Option<f64>,
    pub reminder_in_days: i64,
    #[serde(default)]
    pub historical_check_date: Option<DateTime<Utc>>,
}

/// A plant with no history.
pub fn bare_plant(id: &str, default_watering_interval_days: Option<u32>) -> Plant {
    Plant {
        id: id.to_string(),
        name: format!("Plant {id}"),
        default_watering_interval_days,
    }
}

/// Snapshot of a plant last watered `watered_hours_before` hours before `now`
/// (`None` for never watered).
pub fn snapshot_at(
    now: DateTime<Utc>,
    watered_hours_before: Option<i64>,
    decay_per_day: f64,
    default_watering_interval_days: Option<u32>,
) -> PlantSnapshot {
    let plant = bare_plant("plant-1", default_watering_interval_days);
    let last_watering = watered_hours_before.map(|hours| Watering {
        id: None,
        plant_id: plant.id.clone(),
        watering_date: now - Duration::hours(hours),
        saturation_scale: Wetness::SATURATED,
        bottom_watered: false,
        notes: None,
    });
    PlantSnapshot {
        plant,
        last_watering,
        last_check: None,
        wetness_decay_per_day: DecayRate::from_per_day(decay_per_day),
    }
}
