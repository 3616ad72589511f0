use serde_json::Value;

use crate::lexicon::Lexicon;
use crate::models::{Platform, PlatformAnalysis, PlatformDetails, TextAnalysis};
use crate::payload::{Cursor, Segment};

use super::{Blend, PlatformAnalyzer};

const PROFILE: &str = "Profile";

/// Analyzer for LinkedIn profile exports.
///
/// Summary, headline and every position description form a single corpus.
/// Alongside the risk score it reports a professional score, which rewards
/// positive professional terms and penalizes negative indicators.
pub struct LinkedInAnalyzer;

impl PlatformAnalyzer for LinkedInAnalyzer {
    fn platform(&self) -> Platform {
        Platform::LinkedIn
    }

    fn extract_text(&self, payload: &Value) -> Vec<Segment> {
        vec![profile_segment(payload)]
    }

    fn analyze(&self, lexicon: &Lexicon, payload: &Value) -> PlatformAnalysis {
        let mut blend = Blend::new(lexicon, Platform::LinkedIn);
        let professional_score = blend
            .segment(&profile_segment(payload), 1.0)
            .map_or(0.0, professional_score);

        blend.finish(PlatformDetails::LinkedIn { professional_score })
    }
}

fn profile_segment(payload: &Value) -> Segment {
    let profile = Cursor::new(payload).get("profile");
    let mut segment = Segment::new(PROFILE);

    segment.corpus.push(profile.get("summary").text());
    segment.corpus.push(profile.get("headline").text());
    for position in profile.get("position").items() {
        segment.corpus.push(position.get("description").text());
    }

    segment
}

/// `10` per positive term minus `15` per negative indicator, never below zero.
fn professional_score(analysis: &TextAnalysis) -> f64 {
    let positive = analysis.positive_indicators.len() as f64 * 10.0;
    let negative = analysis.negative_indicators.len() as f64 * 15.0;
    f64::max(0.0, positive - negative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::fragments;
    use crate::payload::sample::sample;
    use serde_json::json;

    fn analyze(payload: &Value) -> PlatformAnalysis {
        LinkedInAnalyzer.analyze(&Lexicon::builtin(), payload)
    }

    #[test]
    fn test_extract_order() {
        let data = json!({ "profile": {
            "summary": "summary text",
            "headline": "headline text",
            "position": [
                { "title": "A", "description": "first role" },
                { "title": "B" },
                { "title": "C", "description": "" },
                { "title": "D", "description": "fourth role" }
            ]
        } });
        let segments = LinkedInAnalyzer.extract_text(&data);
        assert_eq!(
            fragments(&segments),
            vec![
                ("Profile", "summary text"),
                ("Profile", "headline text"),
                ("Profile", "first role"),
                ("Profile", "fourth role"),
            ]
        );
    }

    #[test]
    fn test_professional_score_rewards_positive_terms() {
        let data = json!({ "profile": { "summary": "Award for leadership and mentor work" } });
        let result = analyze(&data);
        assert_eq!(result.professional_score(), Some(30.0));
        assert_eq!(result.risk_score, 0.0);
    }

    #[test]
    fn test_professional_score_never_negative() {
        let data = json!({ "profile": {
            "summary": "fired after the lawsuit and scandal, misconduct and a breach",
            "headline": "team player"
        } });
        let result = analyze(&data);
        assert_eq!(result.professional_score(), Some(0.0));
        assert_eq!(result.risk_score, 100.0);
    }

    #[test]
    fn test_fired_scandal_award_scenario() {
        let data = json!({ "profile": {
            "summary": "I was fired after a scandal, but led an award-winning project"
        } });
        let result = analyze(&data);
        assert_eq!(result.risk_score, 100.0);
        // 2 positive * 10 - 2 negative * 15
        assert_eq!(result.professional_score(), Some(0.0));
        assert_eq!(result.factors[0], "Profile: High-risk keywords detected: fired, scandal");
    }

    #[test]
    fn test_personal_content_penalized() {
        let data = json!({ "profile": { "headline": "Dating coach" } });
        let result = analyze(&data);
        assert_eq!(result.risk_score, 8.0);
        assert_eq!(
            result.factors,
            vec!["Profile: Personal content on professional platform: dating"]
        );
    }

    #[test]
    fn test_missing_profile() {
        let result = analyze(&json!({ "profile": null }));
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.professional_score(), Some(0.0));
    }

    #[test]
    fn test_sample_payload() {
        let result = analyze(&sample(Platform::LinkedIn, "alice"));
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.professional_score(), Some(20.0));
    }
}
