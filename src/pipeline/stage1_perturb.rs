use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, Operation};
use crate::pipeline::Stage;
use crate::sim::{SimulationParameters, perturb};

pub struct Stage1Perturb;

impl Stage1Perturb {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Perturb {
    fn name(&self) -> &'static str {
        "stage1_perturb"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let v0 = ctx.profile.initial_tumor_volume_cm3;
        let mut params = Vec::with_capacity(ctx.arms.len());
        for (idx, &arm) in ctx.arms.iter().enumerate() {
            let baseline = SimulationParameters::baseline(arm, v0)?;
            // For side-by-side simulation the tweak applies to the
            // alternative (second) arm only; single-arm operations tweak
            // their one arm.
            let tweak_applies = match ctx.operation {
                Operation::Simulate => idx == 1,
                _ => true,
            };
            let level = if tweak_applies { ctx.dose_tweak } else { 0 };
            params.push(perturb::apply(&baseline, level)?);
        }
        for p in &params {
            info!(
                arm = p.arm.id(),
                dose_tweak = p.dose_tweak,
                decay_rate = p.decay_rate,
                "parameters_resolved"
            );
        }
        ctx.params = params;
        Ok(())
    }
}
