use std::collections::HashSet;

use crate::patterns::{find_word, question_indicator, BENEFIT_WORDS, CTA_VERBS, EMOTIONAL_WORDS};
use crate::types::{QualityReport, ScoreBreakdown, StrengthTier};

const MAX_SUGGESTIONS: usize = 5;
const DUPLICATE_HEADLINE_PENALTY: u32 = 5;
const SHORT_HEADLINE_CHARS: usize = 20;
const SHORT_DESCRIPTION_CHARS: usize = 60;

const PRICING_WORDS: &[&str] = &[
    "price", "prices", "pricing", "cheap", "cheaper", "cheapest", "affordable", "save", "saving",
    "savings", "discount", "discounts", "deal", "deals", "sale", "offer", "offers", "cost",
];

/// Rates a search ad's element set on a 0-100 scale.
///
/// Headlines contribute up to 40 points, descriptions up to 30, sitelinks
/// and callouts up to 15 each. Suggestions explain how to reach the next
/// tier and are capped at five.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityScorer;

impl QualityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score<S: AsRef<str>>(
        &self,
        headlines: &[S],
        descriptions: &[S],
        sitelinks: &[S],
        callouts: &[S],
    ) -> QualityReport {
        let mut suggestions = Vec::new();

        let headlines = non_blank(headlines);
        let descriptions = non_blank(descriptions);

        let breakdown = ScoreBreakdown {
            headlines: self.score_headlines(&headlines, &mut suggestions),
            descriptions: self.score_descriptions(&descriptions, &mut suggestions),
            sitelinks: extension_points(non_blank(sitelinks).len(), "sitelinks", &mut suggestions),
            callouts: extension_points(non_blank(callouts).len(), "callouts", &mut suggestions),
        };

        let score = breakdown.total();
        suggestions.truncate(MAX_SUGGESTIONS);

        QualityReport {
            score,
            strength: StrengthTier::from_score(score),
            suggestions,
            breakdown,
        }
    }

    fn score_headlines(&self, headlines: &[&str], suggestions: &mut Vec<String>) -> u32 {
        let count = headlines.len();
        let mut points: u32 = match count {
            15.. => 40,
            10..=14 => {
                suggestions.push(format!(
                    "Add {} more headline(s) to reach 15 for maximum ad strength",
                    15 - count
                ));
                30
            }
            5..=9 => {
                suggestions.push(format!(
                    "Add {} more headline(s) to reach 10 for better ad strength",
                    10 - count
                ));
                20
            }
            _ => {
                suggestions.push(format!(
                    "Add at least {} more headline(s); ads need 5 or more to perform well",
                    5 - count
                ));
                10
            }
        };

        let unique: HashSet<String> = headlines.iter().map(|h| h.trim().to_lowercase()).collect();
        if unique.len() < count {
            points = points.saturating_sub(DUPLICATE_HEADLINE_PENALTY);
            suggestions.push(format!(
                "Remove {} duplicate headline(s); every headline should be unique",
                count - unique.len()
            ));
        }

        let short = headlines
            .iter()
            .filter(|h| h.chars().count() < SHORT_HEADLINE_CHARS)
            .count();
        if short * 2 > count {
            suggestions.push(format!(
                "{short} headline(s) are under {SHORT_HEADLINE_CHARS} characters; use more of the 30 available"
            ));
        }

        if count >= 5 {
            let styles = headline_styles(headlines);
            if styles.len() < 2 {
                suggestions.push(
                    "Mix headline patterns: combine questions, calls-to-action, numbers and benefits"
                        .to_string(),
                );
            }

            let mentions_pricing = headlines
                .iter()
                .any(|h| find_word(h, PRICING_WORDS).is_some());
            let has_digits = headlines
                .iter()
                .any(|h| h.chars().any(|c| c.is_ascii_digit()));
            if mentions_pricing && !has_digits {
                suggestions.push(
                    "Headlines mention pricing or savings; add specific numbers (e.g. \"Save 20%\")"
                        .to_string(),
                );
            }
        }

        points
    }

    fn score_descriptions(&self, descriptions: &[&str], suggestions: &mut Vec<String>) -> u32 {
        let count = descriptions.len();
        let points = match count {
            4.. => 30,
            2..=3 => {
                suggestions.push(format!(
                    "Add {} more description(s) to reach 4 for maximum ad strength",
                    4 - count
                ));
                20
            }
            _ => {
                suggestions.push(format!(
                    "Add at least {} more description(s); ads need 2 or more",
                    2 - count
                ));
                10
            }
        };

        let short = descriptions
            .iter()
            .filter(|d| d.chars().count() < SHORT_DESCRIPTION_CHARS)
            .count();
        if short > 0 {
            suggestions.push(format!(
                "{short} description(s) are under {SHORT_DESCRIPTION_CHARS} characters; expand them with more detail"
            ));
        }

        points
    }
}

/// Sitelinks and callouts share one tiering: 4+ → 15, 2-3 → 10, 1 → 5, none → 0.
fn extension_points(count: usize, label: &str, suggestions: &mut Vec<String>) -> u32 {
    match count {
        4.. => 15,
        2..=3 => {
            suggestions.push(format!(
                "Add {} more {label} to reach 4 for maximum ad strength",
                4 - count
            ));
            10
        }
        1 => {
            suggestions.push(format!("Add at least 1 more {label}; 2 or more improve visibility"));
            5
        }
        _ => {
            suggestions.push(format!("Add {label}; they are free extra ad space"));
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum HeadlineStyle {
    Question,
    CallToAction,
    Number,
    Benefit,
}

/// Distinct styles present across the set. A headline can carry several.
fn headline_styles(headlines: &[&str]) -> HashSet<HeadlineStyle> {
    let mut styles = HashSet::new();
    for headline in headlines {
        if question_indicator(headline).is_some() {
            styles.insert(HeadlineStyle::Question);
        }
        if find_word(headline, CTA_VERBS).is_some() {
            styles.insert(HeadlineStyle::CallToAction);
        }
        if headline.chars().any(|c| c.is_ascii_digit()) {
            styles.insert(HeadlineStyle::Number);
        }
        if find_word(headline, BENEFIT_WORDS).is_some()
            || find_word(headline, EMOTIONAL_WORDS).is_some()
        {
            styles.insert(HeadlineStyle::Benefit);
        }
    }
    styles
}

fn non_blank<S: AsRef<str>>(texts: &[S]) -> Vec<&str> {
    texts
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.trim().is_empty())
        .collect()
}

/// Rate an element set. See [`QualityScorer`].
pub fn score<S: AsRef<str>>(
    headlines: &[S],
    descriptions: &[S],
    sitelinks: &[S],
    callouts: &[S],
) -> QualityReport {
    QualityScorer::new().score(headlines, descriptions, sitelinks, callouts)
}
