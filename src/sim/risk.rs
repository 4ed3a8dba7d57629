//! Weighted risk-factor scoring over patient attributes.
//!
//! All banding constants are fixed and documented here. Identical profiles
//! always yield the identical ordered factor list; ordering follows the
//! category precedence in `RiskCategory`, never the impact values.

use crate::error::TwinError;
use crate::schema::v1::{AlcoholUse, HpvStatus, PatientProfile, SmokingStatus};
use crate::sim::{RiskAssessment, RiskCategory, RiskFactor, RiskLevel};

/// A single factor at or above this impact forces overall High risk.
pub const HIGH_IMPACT_THRESHOLD: u32 = 75;

/// Mean-impact bands for the aggregate level.
pub const MEAN_HIGH_THRESHOLD: f64 = 65.0;
pub const MEAN_MEDIUM_THRESHOLD: f64 = 45.0;

/// Per-factor severity bands.
const FACTOR_HIGH_BAND: u32 = 70;
const FACTOR_MEDIUM_BAND: u32 = 45;

pub fn assess(profile: &PatientProfile) -> Result<RiskAssessment, TwinError> {
    let (t, n, m) = parse_tnm(profile)?;

    let factors = vec![
        age_factor(profile.age),
        stage_factor(t, n, m),
        location_factor(profile.tumor_location.as_deref()),
        lifestyle_factor(profile)?,
        response_factor(t, profile.initial_tumor_volume_cm3),
    ];
    let overall = overall_risk(&factors);
    Ok(RiskAssessment { factors, overall })
}

/// Aggregate level: High on any single impact >= 75 or mean >= 65,
/// Medium on mean >= 45, else Low.
pub fn overall_risk(factors: &[RiskFactor]) -> RiskLevel {
    if factors.is_empty() {
        return RiskLevel::Low;
    }
    if factors.iter().any(|f| f.impact >= HIGH_IMPACT_THRESHOLD) {
        return RiskLevel::High;
    }
    let mean = factors.iter().map(|f| f.impact as f64).sum::<f64>() / factors.len() as f64;
    if mean >= MEAN_HIGH_THRESHOLD {
        RiskLevel::High
    } else if mean >= MEAN_MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn level_for(impact: u32) -> RiskLevel {
    if impact >= FACTOR_HIGH_BAND {
        RiskLevel::High
    } else if impact >= FACTOR_MEDIUM_BAND {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Parse a "TxNyMz" staging code into its three digits.
///
/// `stage_tnm` is clinically required: absence is a computation error
/// naming the field, a malformed value is a validation error.
pub(crate) fn parse_tnm(profile: &PatientProfile) -> Result<(u32, u32, u32), TwinError> {
    let raw = profile
        .stage_tnm
        .as_deref()
        .ok_or(TwinError::Computation { field: "stage_tnm" })?;
    let upper = raw.trim().to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let digit_after = |marker: u8, from: usize| -> Option<(u32, usize)> {
        let pos = bytes[from..].iter().position(|&b| b == marker)? + from;
        let d = bytes.get(pos + 1)?;
        d.is_ascii_digit().then(|| ((d - b'0') as u32, pos + 1))
    };
    let parsed = digit_after(b'T', 0).and_then(|(t, i)| {
        digit_after(b'N', i).and_then(|(n, j)| digit_after(b'M', j).map(|(m, _)| (t, n, m)))
    });
    parsed.ok_or_else(|| {
        TwinError::Validation(format!("unparseable TNM stage `{raw}`, expected TxNyMz"))
    })
}

fn age_factor(age: u32) -> RiskFactor {
    let impact = match age {
        0..=39 => 35,
        40..=54 => 50,
        55..=69 => 65,
        _ => 80,
    };
    factor(RiskCategory::Age, impact, "age band")
}

fn stage_factor(t: u32, n: u32, m: u32) -> RiskFactor {
    let base = match t {
        0 | 1 => 40,
        2 => 60,
        3 => 75,
        _ => 90,
    };
    let mut impact = base;
    if n >= 1 {
        impact += 5;
    }
    if m >= 1 {
        impact += 10;
    }
    factor(RiskCategory::TumorStage, impact.min(100), "TNM staging")
}

fn location_factor(location: Option<&str>) -> RiskFactor {
    // Accessibility table; unknown or absent sites score the neutral 60.
    let impact = match location.map(|s| s.to_ascii_lowercase()) {
        Some(site) if site.contains("lip") => 40,
        Some(site) if site.contains("tonsil") => 65,
        Some(site) if site.contains("tongue") => 70,
        Some(site) if site.contains("floor") => 75,
        Some(site) if site.contains("pharynx") => 80,
        _ => 60,
    };
    factor(RiskCategory::Location, impact, "site accessibility")
}

fn lifestyle_factor(profile: &PatientProfile) -> Result<RiskFactor, TwinError> {
    let smoking = profile.smoking_status.ok_or(TwinError::Computation {
        field: "smoking_status",
    })?;
    let mut score: i32 = match smoking {
        SmokingStatus::Current => 40,
        SmokingStatus::Former => 25,
        SmokingStatus::Never => 10,
    };
    score += match profile.alcohol_use {
        Some(AlcoholUse::Heavy) => 20,
        Some(AlcoholUse::Moderate) => 10,
        Some(AlcoholUse::None) | None => 0,
    };
    score += match profile.hpv_status {
        Some(HpvStatus::Negative) => 5,
        Some(HpvStatus::Positive) => -10,
        Some(HpvStatus::Unknown) | None => 0,
    };
    if profile.comorbidities.is_some() {
        score += 10;
    }
    let impact = score.clamp(0, 100) as u32;
    Ok(factor(
        RiskCategory::Lifestyle,
        impact,
        "smoking, alcohol, HPV and comorbidity composite",
    ))
}

fn response_factor(t: u32, volume_cm3: f64) -> RiskFactor {
    let mut impact = 30 + 12 * t;
    if volume_cm3 >= 4.0 {
        impact += 15;
    } else if volume_cm3 >= 2.0 {
        impact += 8;
    }
    factor(
        RiskCategory::TreatmentResponse,
        impact.min(100),
        "estimated response to therapy",
    )
}

fn factor(category: RiskCategory, impact: u32, basis: &str) -> RiskFactor {
    let level = level_for(impact);
    let description = match level {
        RiskLevel::High => format!("Significant concern from {basis}"),
        RiskLevel::Medium => format!("Moderate risk factor from {basis}"),
        RiskLevel::Low => format!("Favorable {basis}"),
    };
    RiskFactor {
        category,
        impact,
        level,
        description,
    }
}
