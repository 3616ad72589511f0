use crate::config::AlertConfig;
use crate::models::{PlatformAnalysis, RiskAlert, Severity};

const ALERT_RECOMMENDATION: &str = "Review flagged content and consider privacy settings adjustments";

/// Raise an alert for a platform result whose score is worth acting on.
pub fn derive(analysis: &PlatformAnalysis, config: &AlertConfig) -> Option<RiskAlert> {
    let score = analysis.risk_score;
    if score <= config.min_score {
        return None;
    }

    let severity = if score > config.high_above {
        Severity::High
    } else if score > config.medium_above {
        Severity::Medium
    } else {
        Severity::Low
    };

    Some(RiskAlert {
        platform: analysis.platform.clone(),
        severity,
        title: format!("Potential risk detected on {}", analysis.platform),
        description: format!(
            "Risk score: {:?}/100. Factors: {}",
            score,
            analysis.factors.join(", ")
        ),
        recommendation: ALERT_RECOMMENDATION.to_string(),
    })
}

/// Alerts for every analysis that warrants one, in input order.
pub fn derive_all(analyses: &[PlatformAnalysis], config: &AlertConfig) -> Vec<RiskAlert> {
    analyses.iter().filter_map(|a| derive(a, config)).collect()
}
