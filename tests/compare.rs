use tumor_twin::error::TwinError;
use tumor_twin::sim::compare::compare_arms;
use tumor_twin::sim::trajectory::simulate_arm;
use tumor_twin::sim::{ArmSeries, SimulationParameters, TrajectoryPoint, TreatmentArm, perturb};

fn series(arm: TreatmentArm, tweak: u8) -> ArmSeries {
    let base = SimulationParameters::baseline(arm, 15.5).unwrap();
    let params = perturb::apply(&base, tweak).unwrap();
    ArmSeries {
        arm,
        tweaked: tweak > 0,
        points: simulate_arm(&params).unwrap(),
    }
}

#[test]
fn aligned_arms_merge_into_one_comparison() {
    let recommended = series(TreatmentArm::SurgeryChemo, 0);
    let alternative = series(TreatmentArm::Chemo, 0);
    let comparison = compare_arms(&recommended, &alternative).unwrap();
    assert_eq!(comparison.timeline.len(), 2);
    assert_eq!(comparison.outcomes.len(), 2);
    let months_a: Vec<u32> = comparison.timeline[0].points.iter().map(|p| p.month).collect();
    let months_b: Vec<u32> = comparison.timeline[1].points.iter().map(|p| p.month).collect();
    assert_eq!(months_a, months_b);
}

#[test]
fn outcomes_carry_final_survival_and_side_effects() {
    let recommended = series(TreatmentArm::SurgeryChemo, 0);
    let alternative = series(TreatmentArm::Chemo, 0);
    let comparison = compare_arms(&recommended, &alternative).unwrap();
    let rec = &comparison.outcomes[0];
    assert_eq!(rec.timeline_label, "Surgery + Chemotherapy");
    assert_eq!(rec.survival_prob, recommended.points[12].survival_pct);
    assert_eq!(rec.side_effects, "Moderate");
    let alt = &comparison.outcomes[1];
    assert_eq!(alt.side_effects, "Mild");
}

#[test]
fn tweaked_arm_label_carries_suffix() {
    let recommended = series(TreatmentArm::SurgeryChemo, 0);
    let alternative = series(TreatmentArm::Chemo, 2);
    let comparison = compare_arms(&recommended, &alternative).unwrap();
    assert_eq!(
        comparison.outcomes[1].timeline_label,
        "Chemotherapy Only (tweaked dose)"
    );
}

#[test]
fn unknown_arm_identifier_is_rejected() {
    assert_eq!(
        TreatmentArm::parse("chemo").unwrap(),
        TreatmentArm::Chemo
    );
    let err = TreatmentArm::parse("immunotherapy").unwrap_err();
    assert!(matches!(err, TwinError::NotFound(_)));
}

#[test]
fn length_mismatch_is_an_index_mismatch() {
    let recommended = series(TreatmentArm::SurgeryChemo, 0);
    let mut alternative = series(TreatmentArm::Chemo, 0);
    alternative.points.truncate(10);
    let err = compare_arms(&recommended, &alternative).unwrap_err();
    assert!(matches!(err, TwinError::IndexMismatch(_)));
}

#[test]
fn diverging_month_index_is_an_index_mismatch() {
    let recommended = series(TreatmentArm::SurgeryChemo, 0);
    let mut alternative = series(TreatmentArm::Chemo, 0);
    alternative.points[5] = TrajectoryPoint {
        month: 99,
        ..alternative.points[5].clone()
    };
    let err = compare_arms(&recommended, &alternative).unwrap_err();
    assert!(matches!(err, TwinError::IndexMismatch(_)));
}
