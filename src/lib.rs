//! `footprint-sentinel` — explainable risk scoring for social-media exports.
//!
//! # Flow
//! 1. A provider payload (untyped JSON) is normalized into named text
//!    segments ([`platform::PlatformAnalyzer::extract_text`]).
//! 2. Each segment is scored against the [`lexicon::Lexicon`]
//!    ([`lexicon::classifier::classify`]).
//! 3. Segment scores are blended per platform ([`platform`]).
//! 4. Platform results are combined by importance weight ([`aggregate`]).
//! 5. Guidance and alerts are derived from the results ([`recommend`], [`alerts`]).
//!
//! The engine is pure and synchronous. Nothing here performs I/O except the
//! config and payload loaders used by the binary.
//!
//! ```
//! use footprint_sentinel::Engine;
//! use serde_json::json;
//!
//! let engine = Engine::default();
//! let linkedin = engine.analyze_platform(
//!     "linkedin",
//!     &json!({ "profile": { "headline": "Award-winning team lead" } }),
//! );
//! let assessment = engine.aggregate(&[linkedin]);
//! assert_eq!(assessment.overall_risk, 0.0);
//! ```

pub mod aggregate;
pub mod alerts;
pub mod config;
pub mod detector;
pub mod lexicon;
pub mod models;
pub mod payload;
pub mod platform;
pub mod recommend;
pub mod report;

use serde_json::Value;

use lexicon::Lexicon;
use models::{OverallAssessment, PlatformAnalysis};
use recommend::Recommend;

/// Entry point owning the lexicon every analysis is scored against.
///
/// Holds no mutable state; share it by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    lexicon: Lexicon,
}

impl Engine {
    pub fn new(lexicon: Lexicon) -> Self {
        Engine { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze one provider payload. Unknown platforms yield a stub, never an error.
    pub fn analyze_platform(&self, platform: &str, payload: &Value) -> PlatformAnalysis {
        platform::analyze_platform(&self.lexicon, platform, payload)
    }

    pub fn aggregate(&self, analyses: &[PlatformAnalysis]) -> OverallAssessment {
        aggregate::aggregate(analyses)
    }

    /// Guidance for either a single platform result or an overall assessment.
    pub fn recommend(&self, subject: &impl Recommend) -> Vec<String> {
        subject.recommendations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexiconConfig;
    use crate::models::Platform;
    use crate::payload::sample::sample;
    use serde_json::json;

    #[test]
    fn test_end_to_end_with_samples() {
        let engine = Engine::default();
        let analyses: Vec<PlatformAnalysis> = Platform::ALL
            .into_iter()
            .map(|p| engine.analyze_platform(p.id(), &sample(p, "alice")))
            .collect();

        assert!(analyses.iter().all(|a| (0.0..=100.0).contains(&a.risk_score)));

        let assessment = engine.aggregate(&analyses);
        // only reddit scores (3.0): 3 * 0.9 / 5.4
        assert!((assessment.overall_risk - 0.5).abs() < 1e-9);
        assert_eq!(assessment.platform_breakdown.len(), 5);
        assert_eq!(
            engine.recommend(&assessment),
            vec!["✅ LOW RISK: Your digital footprint is generally healthy"]
        );

        let linkedin = &analyses[1];
        assert_eq!(
            engine.recommend(linkedin).last().map(String::as_str),
            Some("Consider adding more professional achievements and certifications")
        );
    }

    #[test]
    fn test_engine_uses_extended_lexicon() {
        let config = LexiconConfig {
            high_risk: vec!["doxx".to_string()],
            ..LexiconConfig::default()
        };
        let engine = Engine::new(Lexicon::with_extensions(&config));
        let payload = json!({ "user": { "userInfo": { "user": { "signature": "will doxx you" } } } });
        assert_eq!(engine.analyze_platform("tiktok", &payload).risk_score, 25.0);
        assert_eq!(Engine::default().analyze_platform("tiktok", &payload).risk_score, 0.0);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = Engine::default();
        let payload = json!({ "posts": { "posts": [{ "data": { "title": "hate" } }] } });
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.analyze_platform("reddit", &payload).risk_score))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), 25.0);
            }
        });
    }
}
