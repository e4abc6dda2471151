//! # sprout-core
//!
//! Foundation crate for the Sprout plant-care engine.
//! Defines the plant history records, wetness and decay-rate types, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod plant;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SproutConfig;
pub use errors::{SproutError, SproutResult};
pub use models::{
    Check, DecayEstimate, DecayObservation, FullCheckRequest, InsufficientData, Plant,
    PlantSnapshot, RefinedDecay, Reminder, ReminderType, Watering,
};
pub use plant::{DecayRate, Wetness, WetnessBand};
