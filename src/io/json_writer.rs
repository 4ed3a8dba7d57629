use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::{Ctx, Operation};
use crate::schema::v1::{
    ArmOutcomeV1, ExplanationV1, PredictionV1, RecommendationV1, ReportV1, RiskAssessmentV1,
    RiskFactorV1, SimulationV1, TrajectoryPointV1, TwinV1,
};
use crate::sim::{RiskFactor, TrajectoryPoint};

/// Build the versioned artifact for the operation the pipeline just ran.
pub fn build_artifact(ctx: &Ctx) -> Result<TwinV1> {
    let mut artifact = ctx.artifact.clone();
    match ctx.operation {
        Operation::Simulate => {
            let comparison = ctx.comparison.as_ref().context("comparison missing")?;
            let mut timeline_data = BTreeMap::new();
            for series in &comparison.timeline {
                timeline_data.insert(series.arm.id().to_string(), points_v1(&series.points));
            }
            let mut outcomes = BTreeMap::new();
            for outcome in &comparison.outcomes {
                outcomes.insert(
                    outcome.arm.id().to_string(),
                    ArmOutcomeV1 {
                        timeline_label: outcome.timeline_label.clone(),
                        survival_prob: outcome.survival_prob,
                        side_effects: outcome.side_effects.to_string(),
                    },
                );
            }
            artifact.simulation = Some(SimulationV1 {
                dose_tweak: ctx.dose_tweak,
                timeline_data,
                outcomes,
            });
        }
        Operation::Predict => {
            artifact.prediction = Some(prediction_v1(ctx)?);
        }
        Operation::Explain => {
            artifact.explanation = Some(ExplanationV1 {
                key_drivers: ctx.key_drivers.clone(),
            });
        }
        Operation::Report => {
            let narrative = ctx.narrative.as_ref().context("report missing")?;
            let risk = ctx.risk.as_ref().context("risk assessment missing")?;
            artifact.report = Some(ReportV1 {
                summary: narrative.summary.clone(),
                risk_assessment: RiskAssessmentV1 {
                    overall_risk: risk.overall.as_str().to_string(),
                    risk_factors: factors_v1(&risk.factors),
                },
                treatment_recommendations: RecommendationV1 {
                    primary_treatment: narrative.recommendation.primary.display_label().to_string(),
                    alternative_treatments: narrative
                        .recommendation
                        .alternatives
                        .iter()
                        .map(|arm| arm.display_label().to_string())
                        .collect(),
                    follow_up_schedule: narrative.recommendation.follow_up_schedule.to_string(),
                },
                followups: ctx.followups.clone(),
            });
        }
    }
    Ok(artifact)
}

pub fn write_json(path: &Path, artifact: &TwinV1) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create artifact {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, artifact)?;
    Ok(())
}

fn prediction_v1(ctx: &Ctx) -> Result<PredictionV1> {
    let prediction = ctx.prediction.as_ref().context("prediction missing")?;
    Ok(PredictionV1 {
        treatment: prediction.arm.id().to_string(),
        evolution: points_v1(&prediction.trajectory),
        risk_factors: factors_v1(&prediction.risk_factors),
        treatment_impact: prediction.treatment_impact,
        confidence: prediction.confidence,
        overall_risk: prediction.overall_risk.as_str().to_string(),
    })
}

fn points_v1(points: &[TrajectoryPoint]) -> Vec<TrajectoryPointV1> {
    points
        .iter()
        .map(|p| TrajectoryPointV1 {
            month: p.month,
            volume_cm3: p.volume_cm3,
            survival_pct: p.survival_pct,
        })
        .collect()
}

fn factors_v1(factors: &[RiskFactor]) -> Vec<RiskFactorV1> {
    factors
        .iter()
        .map(|f| RiskFactorV1 {
            factor: f.category.name().to_string(),
            impact: f.impact,
            level: f.level.as_str().to_string(),
            description: f.description.clone(),
        })
        .collect()
}
