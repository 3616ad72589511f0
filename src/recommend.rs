//! Human-readable guidance derived from scores and factors.
//!
//! Per-platform guidance ([`recommend`]) and cross-platform guidance
//! ([`overall`]) use different thresholds and different wording; callers may
//! surface both.

use crate::models::{OverallAssessment, Platform, PlatformAnalysis, PlatformLabel};

/// Anything guidance can be derived from.
pub trait Recommend {
    fn recommendations(&self) -> Vec<String>;
}

impl Recommend for PlatformAnalysis {
    fn recommendations(&self) -> Vec<String> {
        recommend(self.risk_score, &self.platform, &self.factors)
    }
}

impl Recommend for OverallAssessment {
    fn recommendations(&self) -> Vec<String> {
        self.recommendations.clone()
    }
}

/// Guidance for a single platform result.
///
/// Base guidance is tiered by score; platform appendices and a privacy
/// appendix (any factor mentioning "privacy") follow in that order.
pub fn recommend(risk_score: f64, platform: &PlatformLabel, factors: &[String]) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    if risk_score > 70.0 {
        recommendations.push("🚨 URGENT: Review and consider removing high-risk content immediately".into());
        recommendations.push("Consider consulting with a professional reputation management service".into());
    } else if risk_score > 40.0 {
        recommendations.push(
            "⚠️ Review flagged content and consider editing or removing problematic posts".into(),
        );
        recommendations.push("Update privacy settings to limit public visibility".into());
    } else if risk_score > 20.0 {
        recommendations
            .push("💡 Minor concerns detected - review content for potential improvements".into());
    } else {
        recommendations
            .push("✅ Your digital footprint looks good! Keep up the professional standards".into());
    }

    match platform.platform() {
        Some(Platform::LinkedIn) => {
            if risk_score > 15.0 {
                recommendations.push(
                    "LinkedIn is a professional platform - ensure all content aligns with career goals"
                        .into(),
                );
            }
            recommendations
                .push("Consider adding more professional achievements and certifications".into());
        }
        Some(Platform::Twitter) => {
            if risk_score > 25.0 {
                recommendations.push(
                    "Twitter content is highly visible - consider the professional impact of tweets"
                        .into(),
                );
            }
            recommendations
                .push("Review tweet history and consider deleting controversial posts".into());
        }
        Some(Platform::YouTube) => {
            if risk_score > 20.0 {
                recommendations.push(
                    "Video content has lasting impact - review video titles and descriptions".into(),
                );
            }
        }
        Some(Platform::TikTok) | Some(Platform::Reddit) | None => {}
    }

    if factors.iter().any(|f| f.to_lowercase().contains("privacy")) {
        recommendations.push("🔒 Review privacy settings across all platforms".into());
        recommendations.push("Avoid sharing personal information in public posts".into());
    }

    recommendations
}

/// Guidance for the cross-platform score.
pub fn overall(overall_risk: f64) -> Vec<String> {
    let message = if overall_risk > 50.0 {
        "🚨 HIGH RISK: Immediate action required across multiple platforms"
    } else if overall_risk > 25.0 {
        "⚠️ MEDIUM RISK: Review and improve content across platforms"
    } else {
        "✅ LOW RISK: Your digital footprint is generally healthy"
    };
    vec![message.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlatformDetails;

    fn label(platform: Platform) -> PlatformLabel {
        PlatformLabel::Supported(platform)
    }

    #[test]
    fn test_base_tiers() {
        let none = PlatformLabel::from("myspace");
        assert!(recommend(71.0, &none, &[])[0].starts_with("🚨 URGENT"));
        assert_eq!(recommend(71.0, &none, &[]).len(), 2);
        assert!(recommend(70.0, &none, &[])[0].starts_with("⚠️ Review flagged"));
        assert_eq!(recommend(30.0, &none, &[]).len(), 1);
        assert!(recommend(21.0, &none, &[])[0].starts_with("💡"));
        assert!(recommend(20.0, &none, &[])[0].starts_with("✅"));
    }

    #[test]
    fn test_linkedin_appendix() {
        let low = recommend(10.0, &label(Platform::LinkedIn), &[]);
        assert_eq!(
            low,
            vec![
                "✅ Your digital footprint looks good! Keep up the professional standards",
                "Consider adding more professional achievements and certifications",
            ]
        );
        let raised = recommend(16.0, &label(Platform::LinkedIn), &[]);
        assert_eq!(raised.len(), 3);
        assert!(raised[1].starts_with("LinkedIn is a professional platform"));
    }

    #[test]
    fn test_twitter_appendix() {
        let low = recommend(25.0, &label(Platform::Twitter), &[]);
        assert_eq!(
            low.last().map(String::as_str),
            Some("Review tweet history and consider deleting controversial posts")
        );
        assert!(!low.iter().any(|r| r.starts_with("Twitter content")));
        let high = recommend(26.0, &label(Platform::Twitter), &[]);
        assert!(high.iter().any(|r| r.starts_with("Twitter content is highly visible")));
    }

    #[test]
    fn test_youtube_appendix_only_above_twenty() {
        assert_eq!(recommend(20.0, &label(Platform::YouTube), &[]).len(), 1);
        let raised = recommend(20.5, &label(Platform::YouTube), &[]);
        assert_eq!(raised.len(), 2);
        assert!(raised[1].starts_with("Video content has lasting impact"));
    }

    #[test]
    fn test_privacy_appendix_is_case_insensitive_and_score_independent() {
        let factors = vec!["Profile: PRIVACY risks detected: home".to_string()];
        let recs = recommend(0.0, &label(Platform::Reddit), &factors);
        assert_eq!(
            recs,
            vec![
                "✅ Your digital footprint looks good! Keep up the professional standards",
                "🔒 Review privacy settings across all platforms",
                "Avoid sharing personal information in public posts",
            ]
        );
    }

    #[test]
    fn test_overall_thresholds() {
        assert!(overall(50.1)[0].starts_with("🚨 HIGH RISK"));
        assert!(overall(50.0)[0].starts_with("⚠️ MEDIUM RISK"));
        assert!(overall(25.0)[0].starts_with("✅ LOW RISK"));
    }

    #[test]
    fn test_trait_dispatch() {
        let analysis = PlatformAnalysis {
            platform: label(Platform::TikTok),
            risk_score: 45.0,
            factors: vec![],
            segments: vec![],
            details: PlatformDetails::TikTok,
        };
        assert_eq!(analysis.recommendations().len(), 2);

        let assessment = crate::aggregate::aggregate(&[analysis]);
        assert_eq!(
            assessment.recommendations(),
            vec!["⚠️ MEDIUM RISK: Review and improve content across platforms"]
        );
    }
}
