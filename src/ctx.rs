use std::path::PathBuf;

use crate::schema::v1::{FollowupRecord, PatientProfile, TwinV1};
use crate::sim::report::Report;
use crate::sim::{
    ArmSeries, ComparedOutcomes, PredictionResult, RiskAssessment, SimulationParameters,
    TreatmentArm,
};

/// Which logical operation the pipeline is serving. Stages that do not
/// apply to an operation skip themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Simulate,
    Predict,
    Explain,
    Report,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
}

/// Request-scoped pipeline state. Created fresh per request; nothing in
/// here outlives the request or is shared across requests.
#[derive(Debug)]
pub struct Ctx {
    pub operation: Operation,
    pub profile: PatientProfile,
    pub followups: Vec<FollowupRecord>,
    pub arms: Vec<TreatmentArm>,
    pub dose_tweak: u8,
    pub params: Vec<SimulationParameters>,
    pub trajectories: Vec<ArmSeries>,
    pub comparison: Option<ComparedOutcomes>,
    pub risk: Option<RiskAssessment>,
    pub prediction: Option<PredictionResult>,
    pub key_drivers: Vec<String>,
    pub narrative: Option<Report>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub artifact: TwinV1,
}

impl Ctx {
    pub fn new(
        operation: Operation,
        profile: PatientProfile,
        followups: Vec<FollowupRecord>,
        arms: Vec<TreatmentArm>,
        dose_tweak: u8,
        out_dir: PathBuf,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("twin.json");
        let artifact = TwinV1::empty(tool_version, &profile.patient_id);
        Self {
            operation,
            profile,
            followups,
            arms,
            dose_tweak,
            params: Vec::new(),
            trajectories: Vec::new(),
            comparison: None,
            risk: None,
            prediction: None,
            key_drivers: Vec::new(),
            narrative: None,
            warnings: Vec::new(),
            output: OutputPaths { out_dir, json_path },
            artifact,
        }
    }
}
