use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tumor_twin::schema::v1::TwinV1;

const SNAPSHOT: &str = r#"{
  "patients": [
    {
      "patient_id": "P001",
      "age": 62,
      "gender": "male",
      "initial_tumor_volume_cm3": 15.5,
      "stage_tnm": "T3N1M0",
      "tumor_location": "Tongue Base",
      "smoking_status": "current",
      "alcohol_use": "moderate",
      "hpv_status": "unknown",
      "comorbidities": "Hypertension",
      "followups": [
        { "month": 3, "tumor_size_cm": 5.2, "recurrence": false, "response": "partial" },
        { "month": 6, "tumor_size_cm": 1.1, "recurrence": false, "response": "complete" }
      ]
    }
  ]
}"#;

fn write_snapshot(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("patients.json");
    fs::write(&path, SNAPSHOT).unwrap();
    path
}

fn read_artifact(out_dir: &Path) -> TwinV1 {
    let raw = fs::read_to_string(out_dir.join("twin.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn simulate_command_writes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());
    let out = dir.path().join("out");

    let mut cmd = Command::cargo_bin("tumor-twin").unwrap();
    cmd.args([
        "simulate",
        "--patients",
        snapshot.to_str().unwrap(),
        "--patient",
        "P001",
        "--out",
        out.to_str().unwrap(),
        "--arm",
        "surgery-chemo",
        "--alt",
        "chemo",
        "--dose-tweak",
        "1",
    ]);
    cmd.assert().success();

    let artifact = read_artifact(&out);
    assert_eq!(artifact.tool, "tumor-twin");
    let sim = artifact.simulation.unwrap();
    assert_eq!(sim.dose_tweak, 1);
    assert!(sim.timeline_data.contains_key("surgery_chemo"));
    assert!(sim.timeline_data.contains_key("chemo"));
}

#[test]
fn report_command_embeds_followups() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());
    let out = dir.path().join("out");

    let mut cmd = Command::cargo_bin("tumor-twin").unwrap();
    cmd.args([
        "report",
        "--patients",
        snapshot.to_str().unwrap(),
        "--patient",
        "P001",
        "--out",
        out.to_str().unwrap(),
    ]);
    cmd.assert().success();

    let report = read_artifact(&out).report.unwrap();
    assert_eq!(report.followups.len(), 2);
    assert_eq!(report.followups[0].month, 3);
    assert!(report.summary.contains("62-year-old"));
}

#[test]
fn unknown_patient_fails() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());
    let out = dir.path().join("out");

    let mut cmd = Command::cargo_bin("tumor-twin").unwrap();
    cmd.args([
        "predict",
        "--patients",
        snapshot.to_str().unwrap(),
        "--patient",
        "P999",
        "--out",
        out.to_str().unwrap(),
    ]);
    cmd.assert().failure();
}

#[test]
fn out_of_range_dose_tweak_fails() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());
    let out = dir.path().join("out");

    let mut cmd = Command::cargo_bin("tumor-twin").unwrap();
    cmd.args([
        "predict",
        "--patients",
        snapshot.to_str().unwrap(),
        "--patient",
        "P001",
        "--out",
        out.to_str().unwrap(),
        "--dose-tweak",
        "4",
    ]);
    cmd.assert().failure();
}
