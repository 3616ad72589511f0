use serde_json::Value;

use crate::lexicon::Lexicon;
use crate::models::{Engagement, Platform, PlatformAnalysis, PlatformDetails};
use crate::payload::{Cursor, Segment};

use super::{Blend, PlatformAnalyzer};

const PROFILE: &str = "Profile";
const TWEETS: &str = "Tweets";

const PROFILE_WEIGHT: f64 = 0.3;
const TWEETS_WEIGHT: f64 = 0.7;

/// Accounts following more than ten times their follower count look spammy.
const LOW_FOLLOWER_RATIO: f64 = 0.1;
const LOW_FOLLOWER_RATIO_POINTS: f64 = 5.0;

/// Analyzer for Twitter exports: a user-profile lookup under `profile` and a
/// user timeline under `tweets`.
pub struct TwitterAnalyzer;

impl PlatformAnalyzer for TwitterAnalyzer {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    fn extract_text(&self, payload: &Value) -> Vec<Segment> {
        vec![profile_segment(payload), tweets_segment(payload)]
    }

    fn analyze(&self, lexicon: &Lexicon, payload: &Value) -> PlatformAnalysis {
        let mut blend = Blend::new(lexicon, Platform::Twitter);

        let engagement = engagement(payload);
        if let Some(ratio) = engagement.and_then(|e| e.ratio) {
            if ratio < LOW_FOLLOWER_RATIO {
                blend.signal(LOW_FOLLOWER_RATIO_POINTS, "Low follower-to-following ratio");
            }
        }

        blend.segment(&profile_segment(payload), PROFILE_WEIGHT);

        let tweets = tweets_segment(payload);
        if blend.segment(&tweets, TWEETS_WEIGHT).is_some() {
            blend.note(format!("Analyzed {} recent tweets", tweets.corpus.len()));
        }

        blend.finish(PlatformDetails::Twitter {
            engagement,
            tweets_analyzed: tweets.corpus.len(),
        })
    }
}

fn user_legacy(payload: &Value) -> Cursor<'_> {
    Cursor::new(payload).path(&["profile", "result", "data", "user", "result", "legacy"])
}

fn profile_segment(payload: &Value) -> Segment {
    let mut segment = Segment::new(PROFILE);
    segment.corpus.push(user_legacy(payload).get("description").text());
    segment
}

/// Full text of every tweet entry added by the timeline's instructions.
fn tweets_segment(payload: &Value) -> Segment {
    let mut segment = Segment::new(TWEETS);
    let instructions = Cursor::new(payload).path(&["tweets", "result", "timeline", "instructions"]);

    for instruction in instructions.items() {
        if !instruction.get("type").is("TimelineAddEntries") {
            continue;
        }
        for entry in instruction.get("entries").items() {
            let is_tweet = entry
                .get("entryId")
                .as_str()
                .is_some_and(|id| id.starts_with("tweet-"));
            if !is_tweet {
                continue;
            }
            segment.corpus.push(
                entry
                    .path(&["content", "itemContent", "tweet_results", "result", "legacy", "full_text"])
                    .text(),
            );
        }
    }

    segment
}

fn engagement(payload: &Value) -> Option<Engagement> {
    let legacy = user_legacy(payload);
    if !legacy.exists() {
        return None;
    }

    let followers = legacy.get("followers_count").number().unwrap_or(0.0);
    let following = legacy.get("friends_count").number().unwrap_or(0.0);
    let ratio = (following > 0.0).then(|| followers / following);

    Some(Engagement {
        followers,
        following,
        ratio,
    })
}
