//! Compliance rules for ad copy.
//!
//! [`check_compliance`] scans a full search-ad element set for prohibited
//! phrases, character-limit overruns, runs of shouting capitals and missing
//! jurisdiction disclosures. [`check_display_compliance`] applies the
//! display-ad rules and returns advisory strings instead of typed issues.

use crate::element::ElementKind;
use crate::patterns::{find_word, CTA_VERBS};
use crate::types::{ComplianceIssue, ComplianceIssueType, ComplianceSeverity, DisplayAd};

/// Phrases that may never appear in ad copy, matched case-insensitively.
pub const PROHIBITED_PHRASES: &[&str] = &[
    "guaranteed profits",
    "guaranteed returns",
    "risk-free",
    "risk free",
    "no risk",
    "get rich quick",
    "double your money",
    "instant wealth",
    "100% guaranteed",
];

/// More than this many consecutive all-caps tokens is shouting.
const MAX_CAPS_RUN: usize = 2;

/// Regulatory disclosure a jurisdiction requires somewhere in the ad.
struct Disclosure {
    entity: &'static str,
    any_of: &'static [&'static str],
    message: &'static str,
}

const DISCLOSURES: &[Disclosure] = &[
    Disclosure {
        entity: "UK",
        any_of: &["fca", "regulated"],
        message: "UK ads should reference FCA regulation (e.g. \"FCA regulated\")",
    },
    Disclosure {
        entity: "UAE",
        any_of: &["dfsa", "sca"],
        message: "UAE ads should reference DFSA or SCA regulation",
    },
];

/// Stateless checker; see [`check_compliance`] and [`check_display_compliance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceChecker;

impl ComplianceChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check every non-blank field of a search ad. Issues are ordered by
    /// category, then field index; the disclosure rule comes last.
    pub fn check<S: AsRef<str>>(
        &self,
        headlines: &[S],
        descriptions: &[S],
        sitelinks: &[S],
        callouts: &[S],
        entity: Option<&str>,
    ) -> Vec<ComplianceIssue> {
        let mut issues = Vec::new();

        let categories = [
            (ElementKind::Headline, headlines),
            (ElementKind::Description, descriptions),
            (ElementKind::Sitelink, sitelinks),
            (ElementKind::Callout, callouts),
        ];

        for (kind, texts) in categories {
            for (index, text) in texts.iter().enumerate() {
                let text = text.as_ref();
                if text.trim().is_empty() {
                    continue;
                }
                let field = format!("{}[{}]", kind.field_name(), index);
                self.check_prohibited(text, &field, &mut issues);
                self.check_length(kind, text, &field, &mut issues);
                self.check_caps(text, &field, &mut issues);
            }
        }

        let all_text = categories
            .iter()
            .flat_map(|(_, texts)| texts.iter().map(|t| t.as_ref().to_lowercase()))
            .collect::<Vec<_>>();
        if let Some(message) = missing_disclosure(entity, &all_text) {
            issues.push(ComplianceIssue {
                issue_type: ComplianceIssueType::EntitySpecific,
                severity: ComplianceSeverity::Warning,
                message: message.to_string(),
                field: "all".to_string(),
            });
        }

        issues
    }

    /// Advisory messages for a display ad. A missing call-to-action is
    /// reported first and marked critical.
    pub fn check_display(&self, ad: &DisplayAd) -> Vec<String> {
        let mut advisories = Vec::new();

        if ad.cta_text.trim().is_empty() {
            advisories.push(
                "CRITICAL: Display ads require a call-to-action (e.g. \"Shop Now\")".to_string(),
            );
        }

        let short: Vec<&str> = ad
            .short_headlines
            .iter()
            .map(String::as_str)
            .filter(|h| !h.trim().is_empty())
            .collect();

        if !short.iter().any(|h| find_word(h, CTA_VERBS).is_some()) {
            advisories.push(
                "Add a short headline with an action verb such as \"Shop\", \"Get\" or \"Try\""
                    .to_string(),
            );
        }

        let long_chars = ad.long_headline.trim().chars().count();
        if long_chars < 30 {
            advisories.push(format!(
                "Long headline is only {long_chars} characters; aim for at least 30 of the 90 available"
            ));
        }

        if short.len() < 3 {
            advisories.push(format!(
                "Only {} short headline(s); provide at least 3 for better ad rotation",
                short.len()
            ));
        }

        let descriptions = ad
            .descriptions
            .iter()
            .filter(|d| !d.trim().is_empty())
            .count();
        if descriptions < 3 {
            advisories.push(format!(
                "Only {descriptions} description(s); provide at least 3 for better ad rotation"
            ));
        }

        let all_text = std::iter::once(&ad.long_headline)
            .chain(&ad.short_headlines)
            .chain(&ad.descriptions)
            .chain(std::iter::once(&ad.cta_text))
            .map(|t| t.to_lowercase())
            .collect::<Vec<_>>();
        if let Some(message) = missing_disclosure(ad.entity.as_deref(), &all_text) {
            advisories.push(message.to_string());
        }

        advisories
    }

    fn check_prohibited(&self, text: &str, field: &str, issues: &mut Vec<ComplianceIssue>) {
        let lower = text.to_lowercase();
        for phrase in PROHIBITED_PHRASES {
            if lower.contains(phrase) {
                issues.push(ComplianceIssue {
                    issue_type: ComplianceIssueType::ProhibitedWord,
                    severity: ComplianceSeverity::Error,
                    message: format!("Contains prohibited phrase: '{phrase}'"),
                    field: field.to_string(),
                });
            }
        }
    }

    fn check_length(
        &self,
        kind: ElementKind,
        text: &str,
        field: &str,
        issues: &mut Vec<ComplianceIssue>,
    ) {
        if let Some(max) = kind.max_chars() {
            let chars = text.chars().count();
            if chars > max {
                issues.push(ComplianceIssue {
                    issue_type: ComplianceIssueType::CharacterLimit,
                    severity: ComplianceSeverity::Error,
                    message: format!("{kind} is {chars} characters; the limit is {max}"),
                    field: field.to_string(),
                });
            }
        }
    }

    fn check_caps(&self, text: &str, field: &str, issues: &mut Vec<ComplianceIssue>) {
        let mut run = 0;
        for token in text.split(' ') {
            if is_shouting(token) {
                run += 1;
                if run > MAX_CAPS_RUN {
                    issues.push(ComplianceIssue {
                        issue_type: ComplianceIssueType::ExcessiveCaps,
                        severity: ComplianceSeverity::Warning,
                        message: "Avoid excessive capitalization; use title or sentence case"
                            .to_string(),
                        field: field.to_string(),
                    });
                    return;
                }
            } else {
                run = 0;
            }
        }
    }
}

/// Fully upper-case token longer than one character, e.g. `FREE` or `NOW!`.
fn is_shouting(token: &str) -> bool {
    token.chars().count() > 1
        && token.chars().any(char::is_alphabetic)
        && !token.chars().any(char::is_lowercase)
}

fn missing_disclosure(entity: Option<&str>, lowered_fields: &[String]) -> Option<&'static str> {
    let entity = entity?.trim();
    let rule = DISCLOSURES
        .iter()
        .find(|d| d.entity.eq_ignore_ascii_case(entity))?;
    let disclosed = lowered_fields
        .iter()
        .any(|field| rule.any_of.iter().any(|needle| field.contains(needle)));
    (!disclosed).then_some(rule.message)
}

/// Check a search ad element set. See [`ComplianceChecker::check`].
pub fn check_compliance<S: AsRef<str>>(
    headlines: &[S],
    descriptions: &[S],
    sitelinks: &[S],
    callouts: &[S],
    entity: Option<&str>,
) -> Vec<ComplianceIssue> {
    ComplianceChecker::new().check(headlines, descriptions, sitelinks, callouts, entity)
}

/// Display-ad advisories. See [`ComplianceChecker::check_display`].
pub fn check_display_compliance<S: AsRef<str>>(
    long_headline: &str,
    short_headlines: &[S],
    descriptions: &[S],
    cta_text: &str,
    entity: Option<&str>,
) -> Vec<String> {
    let ad = DisplayAd {
        long_headline: long_headline.to_string(),
        short_headlines: short_headlines.iter().map(|s| s.as_ref().to_string()).collect(),
        descriptions: descriptions.iter().map(|s| s.as_ref().to_string()).collect(),
        cta_text: cta_text.to_string(),
        entity: entity.map(str::to_string),
    };
    ComplianceChecker::new().check_display(&ad)
}

/// Whether any issue blocks the ad.
pub fn has_errors(issues: &[ComplianceIssue]) -> bool {
    issues.iter().any(ComplianceIssue::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn test_clean_copy_has_no_issues() {
        let issues = check_compliance(
            &["Shop Winter Coats", "Free Returns On All Orders"],
            &["Warm, waterproof coats for every budget. Order today."],
            &["Men's Coats"],
            &["Free Shipping"],
            None,
        );
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_prohibited_phrase_is_error() {
        let issues = check_compliance(
            &["Guaranteed Profits Every Month"],
            NONE,
            NONE,
            NONE,
            None,
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, ComplianceIssueType::ProhibitedWord);
        assert_eq!(issues[0].severity, ComplianceSeverity::Error);
        assert_eq!(issues[0].field, "headlines[0]");
        assert!(has_errors(&issues));
    }

    #[test]
    fn test_prohibited_phrase_in_callout() {
        let issues = check_compliance(NONE, NONE, NONE, &["Risk-Free Trial"], None);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "callouts[0]");
    }

    #[test]
    fn test_excessive_caps_flagged_once_per_field() {
        let issues = check_compliance(
            &["BUY NOW TODAY ONLY HERE", "Shop NOW FOR less"],
            NONE,
            NONE,
            NONE,
            None,
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, ComplianceIssueType::ExcessiveCaps);
        assert_eq!(issues[0].severity, ComplianceSeverity::Warning);
        assert_eq!(issues[0].field, "headlines[0]");
        assert!(!has_errors(&issues));
    }

    #[test]
    fn test_single_letters_and_numbers_do_not_count_as_caps() {
        let issues = check_compliance(&["A B C Guide", "Save 50 100 200"], NONE, NONE, NONE, None);
        assert!(issues.is_empty());
        assert!(check_compliance(&["UK VAT FAQ"], NONE, NONE, NONE, None)
            .iter()
            .any(|i| i.issue_type == ComplianceIssueType::ExcessiveCaps));
    }

    #[test]
    fn test_character_limits() {
        let long_headline = "h".repeat(31);
        let long_callout = "c".repeat(26);
        let issues = check_compliance(
            &[long_headline.as_str()],
            NONE,
            &["s".repeat(120).as_str()],
            &[long_callout.as_str()],
            None,
        );
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| i.issue_type == ComplianceIssueType::CharacterLimit && i.is_error()));
        assert_eq!(issues[1].field, "callouts[0]");
    }

    #[test]
    fn test_uae_requires_disclosure() {
        let issues = check_compliance(&["Open A Trading Account"], NONE, NONE, NONE, Some("UAE"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, ComplianceIssueType::EntitySpecific);
        assert_eq!(issues[0].severity, ComplianceSeverity::Warning);

        let issues = check_compliance(
            &["Open A Trading Account"],
            &["Licensed by the DFSA."],
            NONE,
            NONE,
            Some("uae"),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_uk_disclosure_checked_across_all_fields() {
        let headlines = ["Invest With Confidence", "Start Trading Today"];
        let issues = check_compliance(&headlines, NONE, NONE, NONE, Some("UK"));
        assert_eq!(issues.len(), 1);

        let issues = check_compliance(&headlines, NONE, NONE, &["FCA Regulated"], Some("UK"));
        assert!(issues.is_empty());

        // Unknown jurisdictions carry no disclosure rule.
        assert!(check_compliance(&headlines, NONE, NONE, NONE, Some("US")).is_empty());
    }

    #[test]
    fn test_display_missing_everything() {
        let advisories = check_display_compliance("Short", NONE, NONE, "", None);
        assert_eq!(advisories.len(), 5);
        assert!(advisories[0].starts_with("CRITICAL"));
    }

    #[test]
    fn test_display_complete_ad_passes() {
        let advisories = check_display_compliance(
            "Discover Handmade Furniture Built To Last For Generations",
            &["Shop Oak Tables", "Handmade In Wales", "Free UK Delivery"],
            &[
                "Solid oak, built by hand.",
                "Ten-year guarantee.",
                "Delivered and assembled free.",
            ],
            "Shop Now",
            Some("US"),
        );
        assert!(advisories.is_empty(), "unexpected advisories: {advisories:?}");
    }

    #[test]
    fn test_display_flags_missing_cta_headline_and_disclosure() {
        let advisories = check_display_compliance(
            "Award Winning Investment Platform For Everyone",
            &["Low Fees", "Expert Support", "Mobile App"],
            &["One.", "Two.", "Three."],
            "Learn More",
            Some("UK"),
        );
        assert_eq!(advisories.len(), 2);
        assert!(advisories[0].contains("action verb"));
        assert!(advisories[1].contains("FCA"));
    }
}
