//! Headline pattern detection.
//!
//! Classifies a headline as a question, call-to-action, number, benefit or
//! emotional headline. Rules are checked in that order and the first match
//! wins, so "Get 50% Off" is a call-to-action, not a number headline.

use crate::types::{HeadlineInsight, HeadlinePattern, PatternType, PositionRecommendation};

pub(crate) const INTERROGATIVES: &[&str] = &[
    "what", "why", "how", "when", "where", "who", "which", "can", "do", "does", "is", "are",
    "will", "should",
];

pub(crate) const CTA_VERBS: &[&str] = &[
    "buy", "get", "try", "start", "shop", "save", "join", "subscribe", "download", "claim",
    "discover", "learn",
];

pub(crate) const BENEFIT_WORDS: &[&str] = &[
    "free", "save", "best", "top", "new", "exclusive", "guaranteed", "easy", "fast", "simple",
];

pub(crate) const EMOTIONAL_WORDS: &[&str] = &[
    "love", "amazing", "perfect", "incredible", "trusted", "popular", "proven", "award",
];

/// Lower-cased alphanumeric tokens of `text`.
pub(crate) fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// First word of `text` found in `vocabulary`.
pub(crate) fn find_word(text: &str, vocabulary: &[&str]) -> Option<String> {
    words(text).find(|w| vocabulary.contains(&w.as_str()))
}

/// `Some(indicator)` when the headline opens with an interrogative or ends with `?`.
pub(crate) fn question_indicator(text: &str) -> Option<String> {
    if let Some(first) = words(text).next() {
        if INTERROGATIVES.contains(&first.as_str()) {
            return Some(first);
        }
    }
    if text.trim_end().ends_with('?') {
        return Some("?".to_string());
    }
    None
}

/// First run of digits in `text`.
pub(crate) fn number_indicator(text: &str) -> Option<String> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    Some(digits)
}

/// Classify a headline. Always returns a pattern; unmatched headlines get
/// [`PatternType::None`] with zero boost.
pub fn detect_pattern(headline: &str) -> HeadlinePattern {
    let (pattern_type, indicator) = if let Some(word) = question_indicator(headline) {
        (PatternType::Question, word)
    } else if let Some(word) = find_word(headline, CTA_VERBS) {
        (PatternType::CallToAction, word)
    } else if let Some(number) = number_indicator(headline) {
        (PatternType::Number, number)
    } else if let Some(word) = find_word(headline, BENEFIT_WORDS) {
        (PatternType::Benefit, word)
    } else if let Some(word) = find_word(headline, EMOTIONAL_WORDS) {
        (PatternType::Emotional, word)
    } else {
        (PatternType::None, String::new())
    };

    HeadlinePattern {
        pattern_type,
        indicator,
        description: pattern_type.description().to_string(),
        boost: pattern_type.boost(),
    }
}

/// Placement advice for a pattern at a zero-based headline position.
/// Only positions 0-2 are covered; anything else returns `None`.
pub fn position_recommendation(
    pattern_type: PatternType,
    position: usize,
) -> Option<PositionRecommendation> {
    let (message, is_optimal) = match (pattern_type, position) {
        (PatternType::CallToAction, 0) => (
            "Call-to-action headlines perform best in position 1",
            true,
        ),
        (PatternType::Question, 0) => ("Question headlines grab attention in position 1", true),
        (PatternType::Number, 0) => (
            "Numbers work well in position 1, but a call-to-action usually performs better",
            false,
        ),
        (PatternType::None, 0) => (
            "Position 1 performs best with a call-to-action or question headline",
            false,
        ),
        (PatternType::Benefit, 1) => ("Benefit headlines support the opener in position 2", true),
        (PatternType::Number, 1) => ("Specific numbers reinforce the opener in position 2", true),
        (PatternType::CallToAction, 1) => (
            "Consider moving this call-to-action to position 1",
            false,
        ),
        (PatternType::Emotional, 2) => ("Trust and emotional headlines close well in position 3", true),
        (PatternType::Benefit, 2) => ("Benefit headlines work well in position 3", true),
        (PatternType::CallToAction, 2) => (
            "Consider moving this call-to-action to position 1",
            false,
        ),
        _ => return None,
    };

    Some(PositionRecommendation {
        message: message.to_string(),
        is_optimal,
    })
}

/// Pattern and placement advice for every headline, in order.
pub fn analyze_headlines<S: AsRef<str>>(headlines: &[S]) -> Vec<HeadlineInsight> {
    headlines
        .iter()
        .enumerate()
        .map(|(position, headline)| {
            let pattern = detect_pattern(headline.as_ref());
            let recommendation = position_recommendation(pattern.pattern_type, position);
            HeadlineInsight {
                position,
                headline: headline.as_ref().to_string(),
                pattern,
                recommendation,
            }
        })
        .collect()
}
