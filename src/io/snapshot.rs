//! Read-only snapshot of the external patient store.
//!
//! Profiles and follow-up history are collaborator-owned; the engine only
//! loads them once at the boundary and never writes them back.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::TwinError;
use crate::schema::v1::{PatientEntry, PatientSnapshot};

pub fn load(path: &Path) -> Result<PatientSnapshot> {
    let file = File::open(path)
        .with_context(|| format!("failed to open patient snapshot {}", path.display()))?;
    let reader = BufReader::new(file);
    let snapshot: PatientSnapshot = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse patient snapshot {}", path.display()))?;
    Ok(snapshot)
}

pub fn find_patient<'a>(
    snapshot: &'a PatientSnapshot,
    patient_id: &str,
) -> Result<&'a PatientEntry, TwinError> {
    snapshot
        .patients
        .iter()
        .find(|entry| entry.profile.patient_id == patient_id)
        .ok_or_else(|| TwinError::NotFound(format!("unknown patient `{patient_id}`")))
}
