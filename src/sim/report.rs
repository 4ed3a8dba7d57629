//! Structured narrative report assembly.

use crate::error::TwinError;
use crate::schema::v1::PatientProfile;
use crate::sim::risk::parse_tnm;
use crate::sim::{PredictionResult, RiskAssessment, RiskLevel, TreatmentArm};

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub primary: TreatmentArm,
    pub alternatives: Vec<TreatmentArm>,
    pub follow_up_schedule: &'static str,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub summary: String,
    pub recommendation: Recommendation,
}

/// Compose the narrative report from already-computed outputs.
pub fn assemble(
    profile: &PatientProfile,
    prediction: &PredictionResult,
    risk: &RiskAssessment,
) -> Result<Report, TwinError> {
    let (t, _, _) = parse_tnm(profile)?;
    let ranked = rank_arms();
    let primary = ranked[0];
    let alternatives = ranked[1..].to_vec();
    let schedule = follow_up_schedule(t, risk.overall);

    let summary = summary_text(profile, prediction, risk, primary);

    Ok(Report {
        summary,
        recommendation: Recommendation {
            primary,
            alternatives,
            follow_up_schedule: schedule,
        },
    })
}

/// All arms ordered by descending treatment impact; ties fall back to
/// enum order so the ranking stays stable.
pub fn rank_arms() -> Vec<TreatmentArm> {
    let mut arms = TreatmentArm::ALL.to_vec();
    arms.sort_by(|a, b| b.treatment_impact().cmp(&a.treatment_impact()).then(a.cmp(b)));
    arms
}

/// Fixed lookup keyed by (T stage, overall risk).
pub fn follow_up_schedule(t_stage: u32, overall: RiskLevel) -> &'static str {
    match (overall, t_stage) {
        (RiskLevel::High, _) => "Monthly follow-up for 12 months",
        (RiskLevel::Medium, t) if t >= 3 => "Monthly follow-up for 12 months",
        (RiskLevel::Medium, _) => "Quarterly follow-up for 24 months",
        (RiskLevel::Low, t) if t >= 3 => "Quarterly follow-up for 24 months",
        (RiskLevel::Low, _) => "Biannual follow-up for 24 months",
    }
}

fn summary_text(
    profile: &PatientProfile,
    prediction: &PredictionResult,
    risk: &RiskAssessment,
    primary: TreatmentArm,
) -> String {
    let stage = profile.stage_tnm.as_deref().unwrap_or("unstaged");
    let final_point = prediction.trajectory.last();
    let projection = final_point
        .map(|p| {
            format!(
                " Projected tumor volume at month {} under {} is {:.2} cm3 with {:.1}% survival probability.",
                p.month,
                prediction.arm.display_label(),
                p.volume_cm3,
                p.survival_pct
            )
        })
        .unwrap_or_default();
    format!(
        "Patient {} is a {}-year-old {} with a {:.1} cm3 tumor classified as stage {}. \
         Overall risk assessment: {} risk. Recommended primary treatment: {}.{}",
        profile.patient_id,
        profile.age,
        profile.gender.as_str(),
        profile.initial_tumor_volume_cm3,
        stage,
        risk.overall.as_str(),
        primary.display_label(),
        projection
    )
}
