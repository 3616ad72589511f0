use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The closed set of platforms the engine knows how to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    LinkedIn,
    YouTube,
    TikTok,
    Reddit,
}

/// Static catalogue entry describing a supported platform.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub risk_weight: f64,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::YouTube,
        Platform::TikTok,
        Platform::Reddit,
    ];

    /// Lowercase identifier used in payload file names, labels and serialized output.
    pub fn id(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::LinkedIn => "linkedin",
            Platform::YouTube => "youtube",
            Platform::TikTok => "tiktok",
            Platform::Reddit => "reddit",
        }
    }

    /// Parse a platform label case-insensitively; `None` for anything outside the closed set.
    pub fn from_label(label: &str) -> Option<Platform> {
        let label = label.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(label))
    }

    /// Cross-platform importance weight used by the aggregator.
    pub fn importance_weight(self) -> f64 {
        match self {
            Platform::LinkedIn => 1.5,
            Platform::Twitter => 1.2,
            Platform::YouTube => 1.0,
            Platform::TikTok => 0.8,
            Platform::Reddit => 0.9,
        }
    }

    pub fn descriptor(self) -> PlatformDescriptor {
        let (name, description) = match self {
            Platform::Twitter => ("Twitter", "Monitor tweets and profile information"),
            Platform::LinkedIn => ("LinkedIn", "Professional network monitoring"),
            Platform::YouTube => ("YouTube", "Video content and channel analysis"),
            Platform::TikTok => ("TikTok", "Short-form video content monitoring"),
            Platform::Reddit => ("Reddit", "Community posts and comments"),
        };
        PlatformDescriptor {
            id: self.id(),
            name,
            description,
            risk_weight: self.importance_weight(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor().name)
    }
}

/// A platform label as supplied by the caller.
///
/// Unknown labels are kept verbatim so that results for unsupported
/// platforms still say which platform they refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformLabel {
    Supported(Platform),
    Unsupported(String),
}

impl PlatformLabel {
    pub fn platform(&self) -> Option<Platform> {
        match self {
            PlatformLabel::Supported(p) => Some(*p),
            PlatformLabel::Unsupported(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlatformLabel::Supported(p) => p.id(),
            PlatformLabel::Unsupported(label) => label,
        }
    }

    /// Importance weight, defaulting to `1.0` for unsupported labels.
    pub fn importance_weight(&self) -> f64 {
        self.platform().map_or(1.0, Platform::importance_weight)
    }
}

impl From<&str> for PlatformLabel {
    fn from(label: &str) -> Self {
        match Platform::from_label(label) {
            Some(p) => PlatformLabel::Supported(p),
            None => PlatformLabel::Unsupported(label.to_string()),
        }
    }
}

impl From<String> for PlatformLabel {
    fn from(label: String) -> Self {
        match Platform::from_label(&label) {
            Some(p) => PlatformLabel::Supported(p),
            None => PlatformLabel::Unsupported(label),
        }
    }
}

impl From<PlatformLabel> for String {
    fn from(label: PlatformLabel) -> Self {
        label.as_str().to_string()
    }
}

impl From<Platform> for PlatformLabel {
    fn from(platform: Platform) -> Self {
        PlatformLabel::Supported(platform)
    }
}

impl std::fmt::Display for PlatformLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Mixed,
    Positive,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Thresholds are evaluated in priority order; both bounds are exclusive.
    pub fn from_score(score: f64, has_positive_terms: bool) -> Self {
        if score > 60.0 {
            Sentiment::Negative
        } else if score > 30.0 {
            Sentiment::Mixed
        } else if has_positive_terms && score < 15.0 {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Mixed => write!(f, "mixed"),
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Result of classifying one text corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Always within `[0, 100]`.
    pub risk_score: f64,
    pub factors: Vec<String>,
    pub sentiment: Sentiment,
    pub positive_indicators: Vec<String>,
    /// Professional-negative, high-risk and medium-risk terms, first occurrence wins.
    pub negative_indicators: Vec<String>,
    pub privacy_risks: Vec<String>,
}

/// One classified segment of a platform payload and the weight it was blended with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentReport {
    pub name: String,
    pub blend_weight: f64,
    pub fragments: usize,
    pub analysis: TextAnalysis,
}

/// Follower/following counts lifted from a profile payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    pub followers: f64,
    pub following: f64,
    pub ratio: Option<f64>,
}

/// Platform-specific signals computed alongside the blended text score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlatformDetails {
    Twitter {
        engagement: Option<Engagement>,
        tweets_analyzed: usize,
    },
    LinkedIn {
        /// Reported next to the risk score, never blended into it.
        professional_score: f64,
    },
    YouTube {
        titles_analyzed: usize,
    },
    TikTok,
    Reddit {
        posts_analyzed: usize,
    },
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformAnalysis {
    pub platform: PlatformLabel,
    /// Weighted sum of segment scores plus structural signals, clamped to `[0, 100]`.
    pub risk_score: f64,
    pub factors: Vec<String>,
    pub segments: Vec<SegmentReport>,
    pub details: PlatformDetails,
}

impl PlatformAnalysis {
    /// Stub returned for labels outside the supported set.
    pub fn unsupported(label: &str) -> Self {
        PlatformAnalysis {
            platform: PlatformLabel::Unsupported(label.to_string()),
            risk_score: 0.0,
            factors: vec![format!("Analysis for {} not yet implemented", label)],
            segments: Vec::new(),
            details: PlatformDetails::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self.details, PlatformDetails::Unsupported)
    }

    pub fn professional_score(&self) -> Option<f64> {
        match self.details {
            PlatformDetails::LinkedIn { professional_score } => Some(professional_score),
            _ => None,
        }
    }

    pub fn segment(&self, name: &str) -> Option<&SegmentReport> {
        self.segments.iter().find(|s| s.name == name)
    }
}

/// One platform's contribution to the cross-platform score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub risk_score: f64,
    pub weight: f64,
    pub weighted_risk: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    /// Importance-weighted mean of platform scores, rounded to one decimal.
    pub overall_risk: f64,
    /// Keyed by platform label; a repeated label keeps its last entry.
    pub platform_breakdown: BTreeMap<String, BreakdownEntry>,
    pub all_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAlert {
    pub platform: PlatformLabel,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
}

/// Everything a scan produces, in the shape handed to renderers.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub platforms: Vec<PlatformAnalysis>,
    pub assessment: OverallAssessment,
    pub alerts: Vec<RiskAlert>,
}
