//! Built-in keyword tables.
//!
//! Every entry is lowercase; matching is a plain substring test against the
//! lowercased corpus, so `"home"` also matches inside `"homework"`.

pub const HIGH_RISK: &[&str] = &[
    "hate",
    "racist",
    "sexist",
    "discriminatory",
    "offensive",
    "illegal",
    "drugs",
    "violence",
    "threat",
    "harassment",
    "confidential",
    "leaked",
    "insider",
    "proprietary",
    "lawsuit",
    "fired",
    "terminated",
    "scandal",
    "controversy",
];

pub const MEDIUM_RISK: &[&str] = &[
    "controversial",
    "political",
    "religion",
    "personal attack",
    "complaint",
    "negative",
    "criticism",
    "unprofessional",
    "drunk",
    "party",
    "inappropriate",
    "gossip",
    "rumor",
];

pub const LOW_RISK: &[&str] = &[
    "opinion", "debate", "discussion", "personal", "casual", "informal", "joke", "humor",
    "sarcasm", "meme",
];

pub const PRIVACY: &[&str] = &[
    "phone number",
    "address",
    "location",
    "home",
    "family",
    "children",
    "personal email",
    "ssn",
    "social security",
    "bank",
    "credit card",
    "password",
    "private",
];

pub const PROFESSIONAL_POSITIVE: &[&str] = &[
    "achievement",
    "award",
    "promotion",
    "success",
    "leadership",
    "innovation",
    "collaboration",
    "professional",
    "expertise",
    "certification",
    "education",
    "volunteer",
    "community",
    "mentor",
    "team",
    "project",
    "accomplished",
    "recognized",
];

pub const PROFESSIONAL_NEGATIVE: &[&str] = &[
    "fired",
    "terminated",
    "lawsuit",
    "scandal",
    "controversy",
    "misconduct",
    "violation",
    "breach",
    "failure",
    "incompetent",
    "lazy",
    "unreliable",
    "dishonest",
    "unethical",
];

/// Personal-life terms that count against a profile on a professional network.
pub const PERSONAL_LIFE: &[&str] = &["personal", "private", "family", "relationship", "dating"];

/// Points added per personal-life term on a professional network.
pub const PERSONAL_LIFE_WEIGHT: f64 = 8.0;
