use crate::lexicon::tables::PERSONAL_LIFE_WEIGHT;
use crate::lexicon::{Category, Lexicon};
use crate::models::{Platform, Sentiment, TextAnalysis};

/// Scores above this many characters count as long-form content.
const LONG_FORM_CHARS: usize = 1000;
/// All-caps text must be longer than this to count as shouting.
const SHOUTING_MIN_CHARS: usize = 20;
/// More than this many `!` (or `?`) counts as excessive punctuation.
const PUNCTUATION_LIMIT: usize = 3;
/// Multiplier applied to Twitter scores before structural heuristics.
const TWITTER_DAMPENING: f64 = 0.8;

/// Classify one text corpus into a risk score with explanatory factors.
///
/// Scoring is additive over keyword categories, then adjusted for the
/// platform, then for the shape of the text:
/// - risk tiers, privacy indicators and negative professional terms add points
/// - positive professional terms subtract points (never below zero)
/// - LinkedIn penalizes personal-life terms; Twitter dampens the running total
/// - long text, shouting and excessive punctuation add flat points
///
/// The result is clamped to `[0, 100]`. Empty text scores `0` with no factors.
pub fn classify(lexicon: &Lexicon, text: &str, platform: Platform) -> TextAnalysis {
    if text.is_empty() {
        return TextAnalysis::default();
    }

    let lowered = text.to_lowercase();
    let mut score = 0.0;
    let mut factors = Vec::new();

    let high = lexicon.matches(Category::HighRisk, &lowered);
    let medium = lexicon.matches(Category::MediumRisk, &lowered);
    let low = lexicon.matches(Category::LowRisk, &lowered);
    let privacy = lexicon.matches(Category::Privacy, &lowered);
    let negative = lexicon.matches(Category::ProfessionalNegative, &lowered);
    let positive = lexicon.matches(Category::ProfessionalPositive, &lowered);

    let additive = [
        (Category::HighRisk, &high, "High-risk keywords detected"),
        (Category::MediumRisk, &medium, "Medium-risk keywords detected"),
        (Category::LowRisk, &low, "Casual content detected"),
        (Category::Privacy, &privacy, "Privacy risks detected"),
        (Category::ProfessionalNegative, &negative, "Negative professional keywords"),
    ];
    for (category, found, label) in additive {
        if !found.is_empty() {
            score += found.len() as f64 * category.weight();
            factors.push(format!("{}: {}", label, found.join(", ")));
        }
    }

    if !positive.is_empty() {
        let credit = positive.len() as f64 * Category::ProfessionalPositive.weight();
        score = f64::max(0.0, score - credit);
        factors.push(format!("Positive professional content: {}", positive.join(", ")));
    }

    match platform {
        Platform::LinkedIn => {
            let personal = lexicon.personal_life_matches(&lowered);
            if !personal.is_empty() {
                score += personal.len() as f64 * PERSONAL_LIFE_WEIGHT;
                factors.push(format!(
                    "Personal content on professional platform: {}",
                    personal.join(", ")
                ));
            }
        }
        Platform::Twitter => score *= TWITTER_DAMPENING,
        Platform::YouTube | Platform::TikTok | Platform::Reddit => {}
    }

    // Structural heuristics run after the platform adjustment so Twitter
    // dampening never shrinks them.
    let char_count = text.chars().count();
    if char_count > LONG_FORM_CHARS {
        score += 5.0;
        factors.push("Long-form content - higher visibility".to_string());
    }
    if char_count > SHOUTING_MIN_CHARS && is_all_caps(text) {
        score += 10.0;
        factors.push("All caps content detected (aggressive tone)".to_string());
    }
    if count_char(text, '!') > PUNCTUATION_LIMIT || count_char(text, '?') > PUNCTUATION_LIMIT {
        score += 5.0;
        factors.push("Excessive punctuation detected".to_string());
    }

    let risk_score = score.clamp(0.0, 100.0);

    let mut negative_indicators: Vec<String> = Vec::new();
    for term in negative.iter().chain(&high).chain(&medium) {
        if !negative_indicators.contains(term) {
            negative_indicators.push(term.clone());
        }
    }

    TextAnalysis {
        risk_score,
        factors,
        sentiment: Sentiment::from_score(risk_score, !positive.is_empty()),
        positive_indicators: positive,
        negative_indicators,
        privacy_risks: privacy,
    }
}

/// True when the text has at least one cased letter and none of them is lowercase.
fn is_all_caps(text: &str) -> bool {
    let mut saw_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            saw_upper = true;
        }
    }
    saw_upper
}

fn count_char(text: &str, needle: char) -> usize {
    text.chars().filter(|&c| c == needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::tables;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn run(text: &str, platform: Platform) -> TextAnalysis {
        classify(&Lexicon::builtin(), text, platform)
    }

    #[test]
    fn test_empty_text() {
        let result = run("", Platform::LinkedIn);
        assert_eq!(result.risk_score, 0.0);
        assert!(result.factors.is_empty());
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_clean_text_scores_zero() {
        let result = run("Enjoying a sunny afternoon at the lake", Platform::TikTok);
        assert_eq!(result.risk_score, 0.0);
        assert!(result.factors.is_empty());
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_clamped_to_hundred() {
        let mut text = tables::HIGH_RISK.join(" ");
        text.push(' ');
        text.push_str(&tables::PROFESSIONAL_NEGATIVE.join(" "));
        text.push_str(&" padding".repeat(200));
        text.push_str("!!!!????");
        for platform in Platform::ALL {
            let result = run(&text, platform);
            assert!(result.risk_score <= 100.0 && result.risk_score >= 0.0);
            assert!(approx(result.risk_score, 100.0));
            assert_eq!(result.sentiment, Sentiment::Negative);
        }
    }

    #[test]
    fn test_tier_weights_and_factor_order() {
        // high: hate (25); medium: gossip (15); low: meme (3); privacy: password (20)
        let result = run("hate gossip meme password", Platform::Reddit);
        assert!(approx(result.risk_score, 63.0));
        assert_eq!(
            result.factors,
            vec![
                "High-risk keywords detected: hate",
                "Medium-risk keywords detected: gossip",
                "Casual content detected: meme",
                "Privacy risks detected: password",
            ]
        );
        assert_eq!(result.privacy_risks, vec!["password"]);
        assert_eq!(result.negative_indicators, vec!["hate", "gossip"]);
    }

    #[test]
    fn test_positive_terms_reduce_but_floor_at_zero() {
        let result = run("mentor and volunteer", Platform::YouTube);
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(
            result.factors,
            vec!["Positive professional content: volunteer, mentor"]
        );
        assert_eq!(result.sentiment, Sentiment::Positive);

        // 15 (gossip) - 2 * 3
        let result = run("gossip about my mentor and team", Platform::YouTube);
        assert!(approx(result.risk_score, 9.0));
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_at_exactly_sixty_is_mixed() {
        let result = run("drunk party gossip rumor", Platform::TikTok);
        assert!(approx(result.risk_score, 60.0));
        assert_eq!(result.sentiment, Sentiment::Mixed);
    }

    #[test]
    fn test_sentiment_at_sixty_one_is_negative() {
        // 25 + 15 + 15 + 3 + 3
        let result = run("hate drunk party joke meme", Platform::TikTok);
        assert!(approx(result.risk_score, 61.0));
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_all_caps_without_keywords() {
        let text = "GOOD MORNING TO YOU ALL X";
        assert_eq!(text.chars().count(), 25);
        let result = run(text, Platform::TikTok);
        assert!(approx(result.risk_score, 10.0));
        assert_eq!(result.factors, vec!["All caps content detected (aggressive tone)"]);
    }

    #[test]
    fn test_short_caps_is_not_shouting() {
        let result = run("GOOD MORNING", Platform::TikTok);
        assert_eq!(result.risk_score, 0.0);
    }

    #[test]
    fn test_punctuation_heuristic() {
        assert!(approx(run("wow!!!!", Platform::Reddit).risk_score, 5.0));
        assert!(approx(run("why????", Platform::Reddit).risk_score, 5.0));
        assert_eq!(run("wow!!! why???", Platform::Reddit).risk_score, 0.0);
    }

    #[test]
    fn test_long_form_heuristic() {
        let text = "a".repeat(1001);
        let result = run(&text, Platform::YouTube);
        assert!(approx(result.risk_score, 5.0));
        assert_eq!(result.factors, vec!["Long-form content - higher visibility"]);
        assert_eq!(run(&"a".repeat(1000), Platform::YouTube).risk_score, 0.0);
    }

    #[test]
    fn test_twitter_dampening_applies_before_structural_heuristics() {
        // 25 * 0.8 + 5, not (25 + 5) * 0.8
        let result = run("hate this!!!!", Platform::Twitter);
        assert!(approx(result.risk_score, 25.0));

        let undampened = run("hate this!!!!", Platform::Reddit);
        assert!(approx(undampened.risk_score, 30.0));
    }

    #[test]
    fn test_twitter_dampening_scales_keyword_score() {
        let base = run("drunk party gossip", Platform::Reddit).risk_score;
        let dampened = run("drunk party gossip", Platform::Twitter).risk_score;
        assert!(approx(dampened, base * 0.8));
    }

    #[test]
    fn test_linkedin_personal_content() {
        let result = run("dating and relationship advice", Platform::LinkedIn);
        assert!(approx(result.risk_score, 16.0));
        assert_eq!(
            result.factors.last().map(String::as_str),
            Some("Personal content on professional platform: relationship, dating")
        );
        assert_eq!(run("dating and relationship advice", Platform::Reddit).risk_score, 0.0);
    }

    #[test]
    fn test_fired_scandal_award_scenario() {
        let result = run(
            "I was fired after a scandal, but led an award-winning project",
            Platform::LinkedIn,
        );
        // high 2*25 + professional negative 2*30 - positive 2*3 = 104, clamped
        assert!(approx(result.risk_score, 100.0));
        assert_eq!(result.positive_indicators, vec!["award", "project"]);
        assert_eq!(result.negative_indicators, vec!["fired", "scandal"]);
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(
            result.factors,
            vec![
                "High-risk keywords detected: fired, scandal",
                "Negative professional keywords: fired, scandal",
                "Positive professional content: award, project",
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "Leaked confidential memo about the party!!!!";
        assert_eq!(run(text, Platform::Twitter), run(text, Platform::Twitter));
    }
}
