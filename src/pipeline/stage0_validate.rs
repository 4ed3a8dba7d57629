use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, Operation};
use crate::error::TwinError;
use crate::pipeline::Stage;
use crate::sim::perturb::DOSE_TWEAK_MAX;

pub struct Stage0Validate;

impl Stage0Validate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Validate {
    fn name(&self) -> &'static str {
        "stage0_validate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.dose_tweak > DOSE_TWEAK_MAX {
            return Err(TwinError::Validation(format!(
                "dose tweak must be in 0..={DOSE_TWEAK_MAX}, got {}",
                ctx.dose_tweak
            ))
            .into());
        }
        let v0 = ctx.profile.initial_tumor_volume_cm3;
        if !v0.is_finite() || v0 <= 0.0 {
            return Err(TwinError::Validation(format!(
                "initial tumor volume must be positive, got {v0}"
            ))
            .into());
        }
        if ctx.arms.is_empty() {
            return Err(TwinError::Validation("no treatment arm requested".to_string()).into());
        }
        if ctx.operation == Operation::Simulate {
            if ctx.arms.len() != 2 {
                return Err(TwinError::Validation(format!(
                    "simulate requires exactly 2 arms, got {}",
                    ctx.arms.len()
                ))
                .into());
            }
            if ctx.arms[0] == ctx.arms[1] {
                return Err(TwinError::Validation(
                    "simulate requires two distinct arms".to_string(),
                )
                .into());
            }
        }
        info!(
            patient = %ctx.profile.patient_id,
            arms = ctx.arms.len(),
            dose_tweak = ctx.dose_tweak,
            "inputs_validated"
        );
        Ok(())
    }
}
