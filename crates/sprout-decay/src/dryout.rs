use sprout_core::constants::TYPICAL_DRYOUT_SPAN;
use sprout_core::DecayRate;

/// Days for soil to go from saturated (10) to near-dry (1) at `rate`.
///
/// Informational only; it does not feed the schedule. `None` for an
/// unknown rate.
pub fn typical_dryout_days(rate: DecayRate) -> Option<f64> {
    rate.per_day().map(|per_day| TYPICAL_DRYOUT_SPAN / per_day)
}
