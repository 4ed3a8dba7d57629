use tumor_twin::sim::trajectory::{
    SURVIVAL_CEIL_PCT, SURVIVAL_FLOOR_PCT, VOLUME_FLOOR_CM3, simulate_arm,
};
use tumor_twin::sim::{HORIZON_MONTHS, SimulationParameters, TreatmentArm};

fn baseline(arm: TreatmentArm, v0: f64) -> SimulationParameters {
    SimulationParameters::baseline(arm, v0).unwrap()
}

#[test]
fn trajectory_starts_at_initial_volume_and_full_survival() {
    for arm in TreatmentArm::ALL {
        let points = simulate_arm(&baseline(arm, 2.3)).unwrap();
        assert_eq!(points.len(), HORIZON_MONTHS as usize + 1);
        assert_eq!(points[0].month, 0);
        assert_eq!(points[0].volume_cm3, 2.3);
        assert_eq!(points[0].survival_pct, 100.0);
    }
}

#[test]
fn volume_is_non_increasing_without_tweak() {
    let points = simulate_arm(&baseline(TreatmentArm::Chemo, 15.5)).unwrap();
    for win in points.windows(2) {
        assert!(win[1].volume_cm3 <= win[0].volume_cm3);
    }
}

#[test]
fn months_run_zero_through_twelve() {
    let points = simulate_arm(&baseline(TreatmentArm::Radiation, 4.0)).unwrap();
    let months: Vec<u32> = points.iter().map(|p| p.month).collect();
    assert_eq!(months, (0..=12).collect::<Vec<u32>>());
}

#[test]
fn closed_form_volume_at_month_six() {
    // 4.1 * exp(-0.18 * 6)
    let points = simulate_arm(&baseline(TreatmentArm::Combined, 4.1)).unwrap();
    assert!((points[6].volume_cm3 - 1.3923).abs() < 1e-3);
}

#[test]
fn volume_never_drops_below_floor() {
    let points = simulate_arm(&baseline(TreatmentArm::SurgeryChemo, 0.2)).unwrap();
    for p in &points {
        assert!(p.volume_cm3 >= VOLUME_FLOOR_CM3);
    }
    assert_eq!(points[12].volume_cm3, VOLUME_FLOOR_CM3);
}

#[test]
fn survival_stays_within_bounds() {
    for arm in TreatmentArm::ALL {
        let points = simulate_arm(&baseline(arm, 8.0)).unwrap();
        for p in &points {
            assert!(p.survival_pct >= SURVIVAL_FLOOR_PCT);
            assert!(p.survival_pct <= SURVIVAL_CEIL_PCT);
        }
    }
}

#[test]
fn combined_bonus_raises_survival() {
    let chemo = simulate_arm(&baseline(TreatmentArm::Chemo, 2.3)).unwrap();
    let combined = simulate_arm(&baseline(TreatmentArm::Combined, 2.3)).unwrap();
    // 100 - 2*6 = 88 vs 100 - 2*6 + 5 = 93
    assert_eq!(chemo[6].survival_pct, 88.0);
    assert_eq!(combined[6].survival_pct, 93.0);
}

#[test]
fn identical_inputs_identical_output() {
    let params = baseline(TreatmentArm::Chemo, 3.7);
    let a = simulate_arm(&params).unwrap();
    let b = simulate_arm(&params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn non_positive_volume_rejected() {
    assert!(SimulationParameters::baseline(TreatmentArm::Chemo, 0.0).is_err());
    assert!(SimulationParameters::baseline(TreatmentArm::Chemo, -1.5).is_err());
}
