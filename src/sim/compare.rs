//! Side-by-side packaging of two simulated treatment arms.

use crate::error::TwinError;
use crate::sim::{ArmOutcome, ArmSeries, ComparedOutcomes};

/// Merge a recommended and an alternative arm into one month-aligned
/// comparison. Both arms must share an identical month-index set; any
/// mismatch is reported, never silently truncated or padded.
pub fn compare_arms(
    recommended: &ArmSeries,
    alternative: &ArmSeries,
) -> Result<ComparedOutcomes, TwinError> {
    if recommended.points.len() != alternative.points.len() {
        return Err(TwinError::IndexMismatch(format!(
            "arm `{}` has {} points, arm `{}` has {}",
            recommended.arm.id(),
            recommended.points.len(),
            alternative.arm.id(),
            alternative.points.len()
        )));
    }
    for (a, b) in recommended.points.iter().zip(&alternative.points) {
        if a.month != b.month {
            return Err(TwinError::IndexMismatch(format!(
                "month index diverges: {} vs {}",
                a.month, b.month
            )));
        }
    }

    let outcomes = [recommended, alternative]
        .into_iter()
        .map(|series| outcome_for(series))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComparedOutcomes {
        timeline: vec![recommended.clone(), alternative.clone()],
        outcomes,
    })
}

fn outcome_for(series: &ArmSeries) -> Result<ArmOutcome, TwinError> {
    let last = series.points.last().ok_or_else(|| {
        TwinError::IndexMismatch(format!("arm `{}` has an empty trajectory", series.arm.id()))
    })?;
    let mut label = series.arm.display_label().to_string();
    if series.tweaked {
        label.push_str(" (tweaked dose)");
    }
    Ok(ArmOutcome {
        arm: series.arm,
        timeline_label: label,
        survival_prob: last.survival_pct,
        side_effects: series.arm.side_effects(),
    })
}
