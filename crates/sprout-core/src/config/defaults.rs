// Single source of truth for all default values.

// --- Schedule ---
pub const DEFAULT_TARGET_CHECK_WETNESS: f64 = 1.5;
pub const DEFAULT_FALLBACK_INTERVAL_DAYS: u32 = 7;
pub const DEFAULT_AUTO_WATER_AT_OR_BELOW: u8 = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
