use serde_json::Value;

use crate::lexicon::Lexicon;
use crate::models::{Platform, PlatformAnalysis, PlatformDetails};
use crate::payload::{Cursor, Segment};

use super::{Blend, PlatformAnalyzer};

const PROFILE: &str = "Profile";

/// Analyzer for TikTok user-info exports; signature and nickname are scored together.
pub struct TikTokAnalyzer;

impl PlatformAnalyzer for TikTokAnalyzer {
    fn platform(&self) -> Platform {
        Platform::TikTok
    }

    fn extract_text(&self, payload: &Value) -> Vec<Segment> {
        vec![profile_segment(payload)]
    }

    fn analyze(&self, lexicon: &Lexicon, payload: &Value) -> PlatformAnalysis {
        let mut blend = Blend::new(lexicon, Platform::TikTok);
        blend.segment(&profile_segment(payload), 1.0);
        blend.finish(PlatformDetails::TikTok)
    }
}

fn profile_segment(payload: &Value) -> Segment {
    let user = Cursor::new(payload).path(&["user", "userInfo", "user"]);
    let mut segment = Segment::new(PROFILE);
    segment.corpus.push(user.get("signature").text());
    segment.corpus.push(user.get("nickname").text());
    segment
}
