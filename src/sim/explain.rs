//! Ranked natural-language "driver" statements over computed risk factors.
//!
//! Text generation only; no new numeric inference happens here.

use crate::sim::{PredictionResult, RiskFactor};

/// At most this many driver strings are returned.
pub const MAX_KEY_DRIVERS: usize = 5;

/// Rank factors by descending impact, ties broken by the fixed category
/// precedence, and render each as a short statement. Deterministic for
/// identical input.
pub fn key_drivers(factors: &[RiskFactor], prediction: &PredictionResult) -> Vec<String> {
    let mut ranked: Vec<&RiskFactor> = factors.iter().collect();
    ranked.sort_by(|a, b| b.impact.cmp(&a.impact).then(a.category.cmp(&b.category)));
    ranked
        .iter()
        .take(MAX_KEY_DRIVERS)
        .enumerate()
        .map(|(rank, f)| {
            if rank == 0 {
                format!(
                    "{} is the dominant factor (impact {}/100, {}) driving the {} overall risk under {} (model confidence {:.0}%).",
                    f.category.name(),
                    f.impact,
                    f.level.as_str(),
                    prediction.overall_risk.as_str(),
                    prediction.arm.display_label(),
                    prediction.confidence * 100.0
                )
            } else {
                format!(
                    "{} contributes impact {}/100 ({}): {}.",
                    f.category.name(),
                    f.impact,
                    f.level.as_str(),
                    f.description
                )
            }
        })
        .collect()
}
