use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::{Ctx, Operation};
use crate::pipeline::Stage;
use crate::sim::{MODEL_CONFIDENCE, PredictionResult};

pub struct Stage5Predict;

impl Stage5Predict {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Predict {
    fn name(&self) -> &'static str {
        "stage5_predict"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.operation == Operation::Simulate {
            return Ok(());
        }
        let series = ctx.trajectories.first().context("trajectory missing")?;
        let risk = ctx.risk.as_ref().context("risk assessment missing")?;
        let prediction = PredictionResult {
            arm: series.arm,
            trajectory: series.points.clone(),
            treatment_impact: series.arm.treatment_impact(),
            confidence: MODEL_CONFIDENCE,
            overall_risk: risk.overall,
            risk_factors: risk.factors.clone(),
        };
        info!(
            arm = prediction.arm.id(),
            treatment_impact = prediction.treatment_impact,
            overall_risk = prediction.overall_risk.as_str(),
            "prediction_ready"
        );
        ctx.prediction = Some(prediction);
        Ok(())
    }
}
