//! Per-platform payload normalizers and analyzers.
//!
//! Each platform module knows where its provider keeps text (the normalizer,
//! [`PlatformAnalyzer::extract_text`]) and how to blend the classified segments
//! into one score ([`PlatformAnalyzer::analyze`]). Blend weights are direct
//! multipliers on each segment score, not a weighted average.

use serde_json::Value;
use tracing::{debug, warn};

use crate::lexicon::classifier::classify;
use crate::lexicon::Lexicon;
use crate::models::{
    Platform, PlatformAnalysis, PlatformDetails, SegmentReport, TextAnalysis,
};
use crate::payload::Segment;

pub mod linkedin;
pub mod reddit;
pub mod tiktok;
pub mod twitter;
pub mod youtube;

pub trait PlatformAnalyzer {
    fn platform(&self) -> Platform;

    /// Pull the named text segments out of a provider payload.
    ///
    /// Missing keys at any depth produce empty segments, never errors.
    fn extract_text(&self, payload: &Value) -> Vec<Segment>;

    fn analyze(&self, lexicon: &Lexicon, payload: &Value) -> PlatformAnalysis;
}

/// The analyzer responsible for `platform`.
pub fn analyzer_for(platform: Platform) -> &'static dyn PlatformAnalyzer {
    match platform {
        Platform::Twitter => &twitter::TwitterAnalyzer,
        Platform::LinkedIn => &linkedin::LinkedInAnalyzer,
        Platform::YouTube => &youtube::YouTubeAnalyzer,
        Platform::TikTok => &tiktok::TikTokAnalyzer,
        Platform::Reddit => &reddit::RedditAnalyzer,
    }
}

/// Analyze a payload for a platform given by label.
///
/// Labels outside the supported set return [`PlatformAnalysis::unsupported`].
pub fn analyze_platform(lexicon: &Lexicon, label: &str, payload: &Value) -> PlatformAnalysis {
    match Platform::from_label(label) {
        Some(platform) => analyzer_for(platform).analyze(lexicon, payload),
        None => {
            warn!(platform = label, "unsupported platform, returning stub analysis");
            PlatformAnalysis::unsupported(label)
        }
    }
}

/// Accumulates weighted segment scores and factors for one platform.
pub(crate) struct Blend<'l> {
    lexicon: &'l Lexicon,
    platform: Platform,
    score: f64,
    factors: Vec<String>,
    segments: Vec<SegmentReport>,
}

impl<'l> Blend<'l> {
    pub(crate) fn new(lexicon: &'l Lexicon, platform: Platform) -> Self {
        Blend {
            lexicon,
            platform,
            score: 0.0,
            factors: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Flat points from a non-text signal.
    pub(crate) fn signal(&mut self, points: f64, factor: &str) {
        self.score += points;
        self.factors.push(factor.to_string());
    }

    /// Informational factor that does not move the score.
    pub(crate) fn note(&mut self, factor: String) {
        self.factors.push(factor);
    }

    /// Classify `segment` and add `weight × score`. Empty segments are skipped.
    pub(crate) fn segment(&mut self, segment: &Segment, weight: f64) -> Option<&TextAnalysis> {
        if segment.corpus.is_empty() {
            return None;
        }

        let analysis = classify(self.lexicon, &segment.corpus.joined(), self.platform);
        debug!(
            platform = self.platform.id(),
            segment = segment.name,
            fragments = segment.corpus.len(),
            score = analysis.risk_score,
            "classified segment"
        );

        self.score += analysis.risk_score * weight;
        self.factors.extend(
            analysis
                .factors
                .iter()
                .map(|factor| format!("{}: {}", segment.name, factor)),
        );
        self.segments.push(SegmentReport {
            name: segment.name.to_string(),
            blend_weight: weight,
            fragments: segment.corpus.len(),
            analysis,
        });
        self.segments.last().map(|s| &s.analysis)
    }

    pub(crate) fn finish(self, details: PlatformDetails) -> PlatformAnalysis {
        PlatformAnalysis {
            platform: self.platform.into(),
            risk_score: self.score.clamp(0.0, 100.0),
            factors: self.factors,
            segments: self.segments,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_payload_scores_zero_everywhere() {
        let lexicon = Lexicon::builtin();
        for payload in [json!({}), json!(null), json!([]), json!("text")] {
            for platform in Platform::ALL {
                let result = analyze_platform(&lexicon, platform.id(), &payload);
                assert_eq!(result.risk_score, 0.0, "{platform:?}");
                assert!(result.is_supported());
                assert!(result.segments.is_empty());
            }
        }
    }

    #[test]
    fn test_unsupported_platform_returns_stub() {
        let lexicon = Lexicon::builtin();
        let payload = json!({ "profile": { "summary": "hate hate hate" } });
        let result = analyze_platform(&lexicon, "myspace", &payload);
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.platform.as_str(), "myspace");
        assert_eq!(result.factors, vec!["Analysis for myspace not yet implemented"]);
        assert_eq!(result.details, PlatformDetails::Unsupported);
    }

    #[test]
    fn test_labels_dispatch_case_insensitively() {
        let lexicon = Lexicon::builtin();
        let payload = json!({ "profile": { "summary": "hate" } });
        let result = analyze_platform(&lexicon, "LinkedIn", &payload);
        assert_eq!(result.platform.platform(), Some(Platform::LinkedIn));
        assert_eq!(result.risk_score, 25.0);
    }

    #[test]
    fn test_analyzer_for_matches_platform() {
        for platform in Platform::ALL {
            assert_eq!(analyzer_for(platform).platform(), platform);
        }
    }

    #[test]
    fn test_blend_clamps_total() {
        let lexicon = Lexicon::builtin();
        let mut blend = Blend::new(&lexicon, Platform::Reddit);
        blend.signal(80.0, "first");
        blend.signal(80.0, "second");
        let result = blend.finish(PlatformDetails::Reddit { posts_analyzed: 0 });
        assert_eq!(result.risk_score, 100.0);
        assert_eq!(result.factors, vec!["first", "second"]);
    }
}
