//! Records consumed and produced by the engine.

mod check;
mod decay;
mod full_check;
mod plant;
mod reminder;
mod watering;

pub use check::Check;
pub use decay::{DecayEstimate, DecayObservation, InsufficientData, RefinedDecay};
pub use full_check::FullCheckRequest;
pub use plant::{Plant, PlantSnapshot};
pub use reminder::{Reminder, ReminderType};
pub use watering::Watering;
