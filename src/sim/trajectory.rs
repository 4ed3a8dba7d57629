//! Closed-form tumor volume and survival trajectory for one treatment arm.
//!
//! Pure function of its parameters: identical inputs always produce an
//! identical trajectory.

use crate::error::TwinError;
use crate::sim::{HORIZON_MONTHS, SimulationParameters, TrajectoryPoint};

/// Volume never drops below this floor (cm³).
pub const VOLUME_FLOOR_CM3: f64 = 0.1;

/// Survival probability bounds (%).
pub const SURVIVAL_FLOOR_PCT: f64 = 60.0;
pub const SURVIVAL_CEIL_PCT: f64 = 100.0;

/// Survival decline per month, in percentage points.
pub const SURVIVAL_SLOPE_PER_MONTH: f64 = 2.0;

/// Simulate months 0..=12 for one arm.
///
/// `volume(m) = max(floor, V0 * exp(rate * m))` and
/// `survival(m) = clamp(100 - slope*m + bonus, floor, 100)`.
/// Month 0 is the seed point: volume is V0 exactly and survival is 100.
pub fn simulate_arm(params: &SimulationParameters) -> Result<Vec<TrajectoryPoint>, TwinError> {
    if !params.initial_volume_cm3.is_finite() || params.initial_volume_cm3 <= 0.0 {
        return Err(TwinError::Validation(format!(
            "initial tumor volume must be positive, got {}",
            params.initial_volume_cm3
        )));
    }
    if params.decay_rate >= 0.0 {
        return Err(TwinError::Validation(format!(
            "decay rate must be negative, got {}",
            params.decay_rate
        )));
    }

    let v0 = params.initial_volume_cm3;
    let bonus = params.arm.survival_bonus();
    let mut points = Vec::with_capacity(HORIZON_MONTHS as usize + 1);
    points.push(TrajectoryPoint {
        month: 0,
        volume_cm3: v0,
        survival_pct: SURVIVAL_CEIL_PCT,
    });
    for month in 1..=HORIZON_MONTHS {
        let volume = (v0 * (params.decay_rate * month as f64).exp()).max(VOLUME_FLOOR_CM3);
        let survival = (SURVIVAL_CEIL_PCT - SURVIVAL_SLOPE_PER_MONTH * month as f64 + bonus)
            .clamp(SURVIVAL_FLOOR_PCT, SURVIVAL_CEIL_PCT);
        points.push(TrajectoryPoint {
            month,
            volume_cm3: volume,
            survival_pct: survival,
        });
    }
    Ok(points)
}
