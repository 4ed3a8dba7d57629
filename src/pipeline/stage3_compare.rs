use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, Operation};
use crate::pipeline::Stage;
use crate::sim::compare::compare_arms;

pub struct Stage3Compare;

impl Stage3Compare {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Compare {
    fn name(&self) -> &'static str {
        "stage3_compare"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.operation != Operation::Simulate {
            return Ok(());
        }
        let comparison = compare_arms(&ctx.trajectories[0], &ctx.trajectories[1])?;
        info!(
            recommended = comparison.outcomes[0].arm.id(),
            alternative = comparison.outcomes[1].arm.id(),
            "comparison_ready"
        );
        ctx.comparison = Some(comparison);
        Ok(())
    }
}
