//! Simulated provider payloads.
//!
//! Shapes mirror what each provider returns so the whole pipeline can be
//! exercised without network access (`--demo`).

use serde_json::{json, Value};

use crate::models::Platform;

/// A representative payload for `platform`, personalized with `username`.
pub fn sample(platform: Platform, username: &str) -> Value {
    match platform {
        Platform::Twitter => twitter(username),
        Platform::LinkedIn => linkedin(username),
        Platform::YouTube => youtube(username),
        Platform::TikTok => tiktok(username),
        Platform::Reddit => reddit(username),
    }
}

fn twitter(username: &str) -> Value {
    json!({
        "profile": {
            "result": {
                "data": {
                    "user": {
                        "result": {
                            "legacy": {
                                "description": format!("Sample Twitter profile for {username}. Building things in public."),
                                "screen_name": username,
                                "name": format!("{} Sample User", capitalize(username)),
                                "followers_count": 1250,
                                "friends_count": 890
                            },
                            "rest_id": "123456789"
                        }
                    }
                }
            }
        },
        "tweets": {
            "result": {
                "timeline": {
                    "instructions": [{
                        "type": "TimelineAddEntries",
                        "entries": [{
                            "entryId": "tweet-1",
                            "content": {
                                "itemContent": {
                                    "tweet_results": {
                                        "result": {
                                            "legacy": {
                                                "full_text": "Just finished an amazing project! Really excited about the future of AI and technology.",
                                                "created_at": "Mon Jan 15 10:30:00 +0000 2025"
                                            }
                                        }
                                    }
                                }
                            }
                        }]
                    }]
                }
            }
        }
    })
}

fn linkedin(username: &str) -> Value {
    json!({
        "profile": {
            "firstName": capitalize(username),
            "lastName": "Sample",
            "headline": "Software Engineer at Tech Company",
            "summary": format!("Experienced engineer with expertise in technology and innovation. Sample profile for {username}."),
            "position": [{
                "title": "Senior Software Engineer",
                "companyName": "Tech Innovations Inc.",
                "description": "Leading development of cutting-edge software solutions.",
                "start": { "year": 2022 },
                "end": { "year": 0 }
            }]
        }
    })
}

fn youtube(username: &str) -> Value {
    json!({
        "channel": {
            "channelId": "UC123456789",
            "title": format!("{} Channel", capitalize(username)),
            "description": format!("Welcome to {username}'s channel! Creating content about technology and innovation."),
            "stats": { "subscribers": "10.5K", "videos": "45", "views": "250K" }
        },
        "videos": {
            "contents": [{
                "type": "video",
                "video": {
                    "title": "My Latest Tech Review - Amazing Innovation!",
                    "videoId": "abc123def456",
                    "publishedTimeText": "2 days ago",
                    "stats": { "views": 5420 }
                }
            }]
        }
    })
}

fn tiktok(username: &str) -> Value {
    json!({
        "user": {
            "userInfo": {
                "user": {
                    "id": "123456789",
                    "uniqueId": username,
                    "nickname": format!("{} TikTok", capitalize(username)),
                    "signature": format!("Creating fun content! Follow {username} for more amazing videos."),
                    "verified": false,
                    "privateAccount": false
                },
                "stats": {
                    "followerCount": 8500,
                    "followingCount": 450,
                    "heartCount": 125000,
                    "videoCount": 67
                }
            }
        }
    })
}

fn reddit(username: &str) -> Value {
    json!({
        "posts": {
            "posts": [{
                "data": {
                    "title": "Great discussion about technology trends",
                    "selftext": "I wanted to share my thoughts on the latest developments in AI and how they might impact our industry.",
                    "author": username,
                    "score": 45,
                    "created_utc": 1705320600
                }
            }]
        }
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Cursor;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("alice"), "Alice");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_samples_are_personalized() {
        let payload = sample(Platform::TikTok, "alice");
        let nickname = Cursor::new(&payload)
            .path(&["user", "userInfo", "user", "nickname"])
            .text();
        assert_eq!(nickname.as_deref(), Some("Alice TikTok"));
    }
}
