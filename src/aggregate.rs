use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{BreakdownEntry, OverallAssessment, PlatformAnalysis};
use crate::recommend;

/// Combine platform analyses into one importance-weighted assessment.
///
/// `overall_risk = Σ(score × weight) / Σ(weight)`, rounded to one decimal.
/// Platforms outside the weight table count with weight `1.0`. Factors are
/// concatenated in input order. Empty input yields the zero assessment.
pub fn aggregate(analyses: &[PlatformAnalysis]) -> OverallAssessment {
    if analyses.is_empty() {
        return OverallAssessment::default();
    }

    let mut total_risk = 0.0;
    let mut total_weight = 0.0;
    let mut platform_breakdown = BTreeMap::new();
    let mut all_factors = Vec::new();

    for analysis in analyses {
        let weight = analysis.platform.importance_weight();
        let weighted_risk = analysis.risk_score * weight;
        total_risk += weighted_risk;
        total_weight += weight;

        platform_breakdown.insert(
            analysis.platform.to_string(),
            BreakdownEntry {
                risk_score: analysis.risk_score,
                weight,
                weighted_risk,
            },
        );
        all_factors.extend(analysis.factors.iter().cloned());
    }

    let overall_risk = if total_weight > 0.0 {
        total_risk / total_weight
    } else {
        0.0
    };
    debug!(platforms = analyses.len(), overall_risk, "aggregated assessment");

    OverallAssessment {
        overall_risk: round_to_tenth(overall_risk),
        platform_breakdown,
        all_factors,
        recommendations: recommend::overall(overall_risk),
    }
}

/// Rounds the exact binary value, so `0.35` (stored just below) becomes `0.3`.
fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
