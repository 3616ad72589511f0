use serde_json::Value;

use crate::lexicon::Lexicon;
use crate::models::{Platform, PlatformAnalysis, PlatformDetails};
use crate::payload::{Cursor, Segment};

use super::{Blend, PlatformAnalyzer};

const POSTS: &str = "Posts";

/// Analyzer for Reddit listings. Each post contributes its title and, when
/// present, its self-text.
pub struct RedditAnalyzer;

impl PlatformAnalyzer for RedditAnalyzer {
    fn platform(&self) -> Platform {
        Platform::Reddit
    }

    fn extract_text(&self, payload: &Value) -> Vec<Segment> {
        vec![posts_segment(payload)]
    }

    fn analyze(&self, lexicon: &Lexicon, payload: &Value) -> PlatformAnalysis {
        let mut blend = Blend::new(lexicon, Platform::Reddit);

        let posts = posts_segment(payload);
        if blend.segment(&posts, 1.0).is_some() {
            blend.note(format!("Analyzed {} posts/comments", posts.corpus.len()));
        }

        blend.finish(PlatformDetails::Reddit {
            posts_analyzed: posts.corpus.len(),
        })
    }
}

fn posts_segment(payload: &Value) -> Segment {
    let mut segment = Segment::new(POSTS);
    for wrapper in Cursor::new(payload).path(&["posts", "posts"]).items() {
        let post = wrapper.get("data");
        segment.corpus.push(post.get("title").text());
        segment.corpus.push(post.get("selftext").text());
    }
    segment
}
