use serde_json::Value;

use crate::lexicon::Lexicon;
use crate::models::{Platform, PlatformAnalysis, PlatformDetails};
use crate::payload::{Cursor, Segment};

use super::{Blend, PlatformAnalyzer};

const CHANNEL: &str = "Channel";
const VIDEOS: &str = "Videos";

const CHANNEL_WEIGHT: f64 = 0.4;
const VIDEOS_WEIGHT: f64 = 0.6;

/// Analyzer for YouTube channel details (`channel`) and the channel's video
/// listing (`videos`). Only entries of type `video` contribute titles.
pub struct YouTubeAnalyzer;

impl PlatformAnalyzer for YouTubeAnalyzer {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn extract_text(&self, payload: &Value) -> Vec<Segment> {
        vec![channel_segment(payload), videos_segment(payload)]
    }

    fn analyze(&self, lexicon: &Lexicon, payload: &Value) -> PlatformAnalysis {
        let mut blend = Blend::new(lexicon, Platform::YouTube);

        blend.segment(&channel_segment(payload), CHANNEL_WEIGHT);

        let videos = videos_segment(payload);
        if blend.segment(&videos, VIDEOS_WEIGHT).is_some() {
            blend.note(format!("Analyzed {} video titles", videos.corpus.len()));
        }

        blend.finish(PlatformDetails::YouTube {
            titles_analyzed: videos.corpus.len(),
        })
    }
}

fn channel_segment(payload: &Value) -> Segment {
    let mut segment = Segment::new(CHANNEL);
    segment
        .corpus
        .push(Cursor::new(payload).path(&["channel", "description"]).text());
    segment
}

fn videos_segment(payload: &Value) -> Segment {
    let mut segment = Segment::new(VIDEOS);
    for content in Cursor::new(payload).path(&["videos", "contents"]).items() {
        if content.get("type").is("video") {
            segment.corpus.push(content.path(&["video", "title"]).text());
        }
    }
    segment
}
