use crate::error::TwinError;

pub mod compare;
pub mod explain;
pub mod perturb;
pub mod report;
pub mod risk;
pub mod trajectory;

/// Simulation horizon in months, inclusive on both ends (0..=12).
pub const HORIZON_MONTHS: u32 = 12;

/// Fixed confidence reported with every prediction.
pub const MODEL_CONFIDENCE: f64 = 0.87;

/// Closed enumeration of treatment strategies. Each arm carries its own
/// baseline decay rate, survival bonus and aggregate impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TreatmentArm {
    Chemo,
    Radiation,
    Combined,
    SurgeryChemo,
}

impl TreatmentArm {
    pub const ALL: [TreatmentArm; 4] = [
        TreatmentArm::Chemo,
        TreatmentArm::Radiation,
        TreatmentArm::Combined,
        TreatmentArm::SurgeryChemo,
    ];

    /// Baseline per-month exponential decay rate. Always strictly negative.
    pub fn base_decay_rate(self) -> f64 {
        match self {
            TreatmentArm::Chemo => -0.15,
            TreatmentArm::Radiation => -0.12,
            TreatmentArm::Combined => -0.18,
            TreatmentArm::SurgeryChemo => -0.22,
        }
    }

    /// Additive survival bonus in percentage points.
    pub fn survival_bonus(self) -> f64 {
        match self {
            TreatmentArm::Chemo => 0.0,
            TreatmentArm::Radiation => 0.0,
            TreatmentArm::Combined => 5.0,
            TreatmentArm::SurgeryChemo => 7.0,
        }
    }

    /// Aggregate treatment-impact score (0-100) used to rank arms.
    pub fn treatment_impact(self) -> u32 {
        match self {
            TreatmentArm::Chemo => 78,
            TreatmentArm::Radiation => 74,
            TreatmentArm::Combined => 92,
            TreatmentArm::SurgeryChemo => 88,
        }
    }

    pub fn side_effects(self) -> &'static str {
        match self {
            TreatmentArm::Chemo => "Mild",
            TreatmentArm::Radiation => "Mild",
            TreatmentArm::Combined => "Moderate",
            TreatmentArm::SurgeryChemo => "Moderate",
        }
    }

    /// Stable identifier used as a map key in output artifacts.
    pub fn id(self) -> &'static str {
        match self {
            TreatmentArm::Chemo => "chemo",
            TreatmentArm::Radiation => "radiation",
            TreatmentArm::Combined => "combined",
            TreatmentArm::SurgeryChemo => "surgery_chemo",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            TreatmentArm::Chemo => "Chemotherapy Only",
            TreatmentArm::Radiation => "Radiation Only",
            TreatmentArm::Combined => "Combined Chemoradiation",
            TreatmentArm::SurgeryChemo => "Surgery + Chemotherapy",
        }
    }

    pub fn parse(s: &str) -> Result<Self, TwinError> {
        match s {
            "chemo" => Ok(TreatmentArm::Chemo),
            "radiation" => Ok(TreatmentArm::Radiation),
            "combined" => Ok(TreatmentArm::Combined),
            "surgery_chemo" => Ok(TreatmentArm::SurgeryChemo),
            other => Err(TwinError::NotFound(format!(
                "unknown treatment arm `{other}`"
            ))),
        }
    }
}

/// Resolved inputs for one simulation run of one arm.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub arm: TreatmentArm,
    pub initial_volume_cm3: f64,
    pub dose_tweak: u8,
    pub decay_rate: f64,
}

impl SimulationParameters {
    /// Unperturbed parameters for an arm. Rejects non-positive volumes.
    pub fn baseline(arm: TreatmentArm, initial_volume_cm3: f64) -> Result<Self, TwinError> {
        if !initial_volume_cm3.is_finite() || initial_volume_cm3 <= 0.0 {
            return Err(TwinError::Validation(format!(
                "initial tumor volume must be positive, got {initial_volume_cm3}"
            )));
        }
        Ok(Self {
            arm,
            initial_volume_cm3,
            dose_tweak: 0,
            decay_rate: arm.base_decay_rate(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoint {
    pub month: u32,
    pub volume_cm3: f64,
    pub survival_pct: f64,
}

/// One simulated arm with its resolved parameters attached.
#[derive(Debug, Clone)]
pub struct ArmSeries {
    pub arm: TreatmentArm,
    pub tweaked: bool,
    pub points: Vec<TrajectoryPoint>,
}

/// Fixed category precedence. Output ordering follows this, never the
/// impact values, so repeated calls stay byte-stable for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskCategory {
    Age,
    TumorStage,
    Location,
    Lifestyle,
    TreatmentResponse,
}

impl RiskCategory {
    pub fn name(self) -> &'static str {
        match self {
            RiskCategory::Age => "Age",
            RiskCategory::TumorStage => "Tumor Stage",
            RiskCategory::Location => "Location",
            RiskCategory::Lifestyle => "Lifestyle",
            RiskCategory::TreatmentResponse => "Treatment Response",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactor {
    pub category: RiskCategory,
    pub impact: u32,
    pub level: RiskLevel,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub factors: Vec<RiskFactor>,
    pub overall: RiskLevel,
}

#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub arm: TreatmentArm,
    pub trajectory: Vec<TrajectoryPoint>,
    pub treatment_impact: u32,
    pub confidence: f64,
    pub overall_risk: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
}

#[derive(Debug, Clone)]
pub struct ArmOutcome {
    pub arm: TreatmentArm,
    pub timeline_label: String,
    pub survival_prob: f64,
    pub side_effects: &'static str,
}

/// Month-aligned side-by-side packaging of two arms.
#[derive(Debug, Clone)]
pub struct ComparedOutcomes {
    pub timeline: Vec<ArmSeries>,
    pub outcomes: Vec<ArmOutcome>,
}
