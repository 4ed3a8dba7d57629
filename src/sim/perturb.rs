//! Dose-tweak ("what-if") perturbation of simulation parameters.
//!
//! Level 0 is the identity transform; each level deepens the decay-rate
//! magnitude by a fixed increment. The magnitude is capped so the rate
//! never reaches zero from below nor grows without bound.

use crate::error::TwinError;
use crate::sim::SimulationParameters;

pub const DOSE_TWEAK_MAX: u8 = 3;

/// Decay-rate magnitude added per tweak level.
pub const RATE_INCREMENT_PER_LEVEL: f64 = 0.02;

/// Upper bound on decay-rate magnitude.
pub const MAX_DECAY_MAGNITUDE: f64 = 0.30;

/// Apply a clinician dose tweak to baseline parameters.
///
/// Out-of-range levels are rejected rather than clamped; the "tweak 0
/// disables perturbation" invariant depends on exact range semantics.
pub fn apply(base: &SimulationParameters, level: u8) -> Result<SimulationParameters, TwinError> {
    if level > DOSE_TWEAK_MAX {
        return Err(TwinError::Validation(format!(
            "dose tweak must be in 0..={DOSE_TWEAK_MAX}, got {level}"
        )));
    }
    let magnitude = (base.arm.base_decay_rate().abs() + RATE_INCREMENT_PER_LEVEL * level as f64)
        .min(MAX_DECAY_MAGNITUDE);
    Ok(SimulationParameters {
        arm: base.arm,
        initial_volume_cm3: base.initial_volume_cm3,
        dose_tweak: level,
        decay_rate: -magnitude,
    })
}
