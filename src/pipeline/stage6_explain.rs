use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::{Ctx, Operation};
use crate::pipeline::Stage;
use crate::sim::explain::key_drivers;

pub struct Stage6Explain;

impl Stage6Explain {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Explain {
    fn name(&self) -> &'static str {
        "stage6_explain"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.operation != Operation::Explain {
            return Ok(());
        }
        let risk = ctx.risk.as_ref().context("risk assessment missing")?;
        let prediction = ctx.prediction.as_ref().context("prediction missing")?;
        let drivers = key_drivers(&risk.factors, prediction);
        info!(drivers = drivers.len(), "key_drivers_ready");
        ctx.key_drivers = drivers;
        Ok(())
    }
}
