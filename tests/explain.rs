use tumor_twin::sim::explain::{MAX_KEY_DRIVERS, key_drivers};
use tumor_twin::sim::risk::level_for;
use tumor_twin::sim::trajectory::simulate_arm;
use tumor_twin::sim::{
    MODEL_CONFIDENCE, PredictionResult, RiskCategory, RiskFactor, RiskLevel, SimulationParameters,
    TreatmentArm,
};

fn factor(category: RiskCategory, impact: u32) -> RiskFactor {
    RiskFactor {
        category,
        impact,
        level: level_for(impact),
        description: format!("{} contribution", category.name()),
    }
}

fn prediction(factors: Vec<RiskFactor>) -> PredictionResult {
    let params = SimulationParameters::baseline(TreatmentArm::Chemo, 2.3).unwrap();
    PredictionResult {
        arm: TreatmentArm::Chemo,
        trajectory: simulate_arm(&params).unwrap(),
        treatment_impact: TreatmentArm::Chemo.treatment_impact(),
        confidence: MODEL_CONFIDENCE,
        overall_risk: RiskLevel::Medium,
        risk_factors: factors,
    }
}

#[test]
fn at_most_five_drivers() {
    let factors = vec![
        factor(RiskCategory::Age, 65),
        factor(RiskCategory::TumorStage, 75),
        factor(RiskCategory::Location, 70),
        factor(RiskCategory::Lifestyle, 55),
        factor(RiskCategory::TreatmentResponse, 82),
    ];
    let drivers = key_drivers(&factors, &prediction(factors.clone()));
    assert!(drivers.len() <= MAX_KEY_DRIVERS);
    assert_eq!(drivers.len(), 5);
}

#[test]
fn drivers_ranked_by_descending_impact() {
    let factors = vec![
        factor(RiskCategory::Age, 65),
        factor(RiskCategory::TumorStage, 75),
        factor(RiskCategory::Location, 70),
        factor(RiskCategory::Lifestyle, 55),
        factor(RiskCategory::TreatmentResponse, 82),
    ];
    let drivers = key_drivers(&factors, &prediction(factors.clone()));
    assert!(drivers[0].starts_with("Treatment Response"));
    assert!(drivers[1].starts_with("Tumor Stage"));
    assert!(drivers[2].starts_with("Location"));
    assert!(drivers[3].starts_with("Age"));
    assert!(drivers[4].starts_with("Lifestyle"));
}

#[test]
fn ties_break_by_category_precedence() {
    let factors = vec![
        factor(RiskCategory::Age, 70),
        factor(RiskCategory::TumorStage, 70),
        factor(RiskCategory::Location, 70),
    ];
    let drivers = key_drivers(&factors, &prediction(factors.clone()));
    assert!(drivers[0].starts_with("Age"));
    assert!(drivers[1].starts_with("Tumor Stage"));
    assert!(drivers[2].starts_with("Location"));
}

#[test]
fn identical_input_identical_output() {
    let factors = vec![
        factor(RiskCategory::Age, 65),
        factor(RiskCategory::TumorStage, 75),
    ];
    let p = prediction(factors.clone());
    let a = key_drivers(&factors, &p);
    let b = key_drivers(&factors, &p);
    assert_eq!(a, b);
}

#[test]
fn top_driver_mentions_overall_risk_and_confidence() {
    let factors = vec![factor(RiskCategory::TumorStage, 80)];
    let drivers = key_drivers(&factors, &prediction(factors.clone()));
    assert!(drivers[0].contains("Medium overall risk"));
    assert!(drivers[0].contains("87%"));
}
