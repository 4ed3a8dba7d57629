use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholUse {
    None,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HpvStatus {
    Negative,
    Positive,
    Unknown,
}

/// Externally supplied patient profile. Read-only to the core; the engine
/// recomputes everything per request and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    pub patient_id: String,
    pub age: u32,
    pub gender: Gender,
    pub initial_tumor_volume_cm3: f64,
    pub stage_tnm: Option<String>,
    pub tumor_location: Option<String>,
    pub smoking_status: Option<SmokingStatus>,
    pub alcohol_use: Option<AlcoholUse>,
    pub hpv_status: Option<HpvStatus>,
    pub comorbidities: Option<String>,
}

/// One historical follow-up visit, supplied by an external store and
/// surfaced verbatim in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowupRecord {
    pub month: u32,
    pub tumor_size_cm: f64,
    #[serde(default)]
    pub recurrence: bool,
    pub treatment_type: Option<String>,
    pub response: Option<String>,
    pub follow_up_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientEntry {
    #[serde(flatten)]
    pub profile: PatientProfile,
    #[serde(default)]
    pub followups: Vec<FollowupRecord>,
}

/// Snapshot of the external patient store, loaded once at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSnapshot {
    pub patients: Vec<PatientEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryPointV1 {
    pub month: u32,
    pub volume_cm3: f64,
    pub survival_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmOutcomeV1 {
    pub timeline_label: String,
    pub survival_prob: f64,
    pub side_effects: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationV1 {
    pub dose_tweak: u8,
    pub timeline_data: BTreeMap<String, Vec<TrajectoryPointV1>>,
    pub outcomes: BTreeMap<String, ArmOutcomeV1>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactorV1 {
    pub factor: String,
    pub impact: u32,
    pub level: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionV1 {
    pub treatment: String,
    pub evolution: Vec<TrajectoryPointV1>,
    pub risk_factors: Vec<RiskFactorV1>,
    pub treatment_impact: u32,
    pub confidence: f64,
    pub overall_risk: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationV1 {
    pub key_drivers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessmentV1 {
    pub overall_risk: String,
    pub risk_factors: Vec<RiskFactorV1>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationV1 {
    pub primary_treatment: String,
    pub alternative_treatments: Vec<String>,
    pub follow_up_schedule: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportV1 {
    pub summary: String,
    pub risk_assessment: RiskAssessmentV1,
    pub treatment_recommendations: RecommendationV1,
    pub followups: Vec<FollowupRecord>,
}

/// Versioned output artifact. Exactly one section is populated per
/// operation; the rest stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwinV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub patient_id: String,
    pub simulation: Option<SimulationV1>,
    pub prediction: Option<PredictionV1>,
    pub explanation: Option<ExplanationV1>,
    pub report: Option<ReportV1>,
}

impl TwinV1 {
    pub fn empty(tool_version: &str, patient_id: &str) -> Self {
        Self {
            tool: "tumor-twin".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            patient_id: patient_id.to_string(),
            simulation: None,
            prediction: None,
            explanation: None,
            report: None,
        }
    }
}
