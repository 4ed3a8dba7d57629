use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::{Ctx, Operation};
use crate::pipeline::Stage;
use crate::sim::report::assemble;

pub struct Stage7Report;

impl Stage7Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Report {
    fn name(&self) -> &'static str {
        "stage7_report"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.operation != Operation::Report {
            return Ok(());
        }
        let prediction = ctx.prediction.as_ref().context("prediction missing")?;
        let risk = ctx.risk.as_ref().context("risk assessment missing")?;
        let narrative = assemble(&ctx.profile, prediction, risk)?;
        info!(
            primary = narrative.recommendation.primary.id(),
            schedule = narrative.recommendation.follow_up_schedule,
            "report_ready"
        );
        ctx.narrative = Some(narrative);
        Ok(())
    }
}
