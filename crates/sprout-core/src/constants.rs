/// Sprout engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wetness of fully saturated soil.
pub const FULL_SATURATION: f64 = 10.0;

/// Distance from saturation (10) to near-dry (1), used for the typical dryout time.
pub const TYPICAL_DRYOUT_SPAN: f64 = 9.0;

/// Decay-based schedules never land closer than this to the reference instant.
pub const MINIMUM_CHECK_GAP_DAYS: f64 = 1.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Wetness a fresh check starts at.
pub const DEFAULT_DRAFT_WETNESS: u8 = 3;

/// Wetness a quick-water check starts at.
pub const QUICK_WATER_WETNESS: u8 = 1;
