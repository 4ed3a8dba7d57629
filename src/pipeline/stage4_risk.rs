use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, Operation};
use crate::pipeline::Stage;
use crate::sim::risk::assess;

pub struct Stage4Risk;

impl Stage4Risk {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Risk {
    fn name(&self) -> &'static str {
        "stage4_risk"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.operation == Operation::Simulate {
            return Ok(());
        }
        let assessment = assess(&ctx.profile)?;
        info!(
            overall = assessment.overall.as_str(),
            factors = assessment.factors.len(),
            "risk_assessment_ready"
        );
        ctx.risk = Some(assessment);
        Ok(())
    }
}
