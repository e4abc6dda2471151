//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p sprout-core export_bindings
//! Generated files appear in sprout-core/bindings/*.ts
//!
//! CI should run this and then `git diff --exit-code` to catch drift between
//! the engine records and the web client.

#[test]
fn export_bindings() {
    // The actual file generation happens via the #[ts(export)] attribute
    // when `cargo test` runs. This test validates all types are importable
    // and TS-derivable.
    use sprout_core::models::{Check, FullCheckRequest, Plant, Reminder, ReminderType, Watering};
    use sprout_core::plant::{Wetness, WetnessBand};

    let _ = std::any::type_name::<Wetness>();
    let _ = std::any::type_name::<WetnessBand>();
    let _ = std::any::type_name::<Plant>();
    let _ = std::any::type_name::<Watering>();
    let _ = std::any::type_name::<Check>();
    let _ = std::any::type_name::<Reminder>();
    let _ = std::any::type_name::<ReminderType>();
    let _ = std::any::type_name::<FullCheckRequest>();
}
