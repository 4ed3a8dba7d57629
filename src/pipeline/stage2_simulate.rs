use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::sim::ArmSeries;
use crate::sim::trajectory::simulate_arm;

pub struct Stage2Simulate;

impl Stage2Simulate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Simulate {
    fn name(&self) -> &'static str {
        "stage2_simulate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut series = Vec::with_capacity(ctx.params.len());
        for params in &ctx.params {
            let points = simulate_arm(params)?;
            series.push(ArmSeries {
                arm: params.arm,
                tweaked: params.dose_tweak > 0,
                points,
            });
        }
        info!(arms = series.len(), "trajectories_ready");
        ctx.trajectories = series;
        Ok(())
    }
}
