//! Validated ad elements.
//!
//! Blank-filtering and character limits are enforced once, when an
//! [`AdElement`] is constructed; everything downstream of
//! [`ContentPool::validated`] can assume clean input.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::ContentPool;

/// The category an ad element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Headline,
    Description,
    Sitelink,
    Callout,
}

impl ElementKind {
    /// Maximum length in characters. Sitelinks are unrestricted.
    pub fn max_chars(&self) -> Option<usize> {
        match self {
            ElementKind::Headline => Some(30),
            ElementKind::Description => Some(90),
            ElementKind::Sitelink => None,
            ElementKind::Callout => Some(25),
        }
    }

    /// Plural field name used in compliance issue locations.
    pub fn field_name(&self) -> &'static str {
        match self {
            ElementKind::Headline => "headlines",
            ElementKind::Description => "descriptions",
            ElementKind::Sitelink => "sitelinks",
            ElementKind::Callout => "callouts",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Headline => "headline",
            ElementKind::Description => "description",
            ElementKind::Sitelink => "sitelink",
            ElementKind::Callout => "callout",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    #[error("{0} text is blank")]
    Blank(ElementKind),

    #[error("{kind} is {chars} characters, limit is {max}")]
    TooLong {
        kind: ElementKind,
        chars: usize,
        max: usize,
    },
}

/// A non-blank element text that fits its category's character limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdElement {
    text: String,
}

impl AdElement {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Result<Self, ElementError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ElementError::Blank(kind));
        }
        let chars = text.chars().count();
        if let Some(max) = kind.max_chars() {
            if chars > max {
                return Err(ElementError::TooLong { kind, chars, max });
            }
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for AdElement {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// A content pool reduced to elements that passed validation, in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedPool {
    pub headlines: Vec<AdElement>,
    pub descriptions: Vec<AdElement>,
    pub sitelinks: Vec<AdElement>,
    pub callouts: Vec<AdElement>,
}

impl ValidatedPool {
    /// Elements of one category.
    pub fn of(&self, kind: ElementKind) -> &[AdElement] {
        match kind {
            ElementKind::Headline => &self.headlines,
            ElementKind::Description => &self.descriptions,
            ElementKind::Sitelink => &self.sitelinks,
            ElementKind::Callout => &self.callouts,
        }
    }
}

impl ContentPool {
    /// Filter every category through [`AdElement::new`], dropping entries
    /// that are blank or over their limit.
    pub fn validated(&self) -> ValidatedPool {
        ValidatedPool {
            headlines: keep_valid(ElementKind::Headline, &self.headlines),
            descriptions: keep_valid(ElementKind::Description, &self.descriptions),
            sitelinks: keep_valid(ElementKind::Sitelink, &self.sitelinks),
            callouts: keep_valid(ElementKind::Callout, &self.callouts),
        }
    }
}

fn keep_valid(kind: ElementKind, texts: &[String]) -> Vec<AdElement> {
    let valid: Vec<AdElement> = texts
        .iter()
        .filter_map(|text| AdElement::new(kind, text.as_str()).ok())
        .collect();
    if valid.len() < texts.len() {
        debug!(
            %kind,
            dropped = texts.len() - valid.len(),
            kept = valid.len(),
            "filtered invalid pool entries"
        );
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_text() {
        assert_eq!(
            AdElement::new(ElementKind::Headline, "   "),
            Err(ElementError::Blank(ElementKind::Headline))
        );
        assert!(AdElement::new(ElementKind::Sitelink, "").is_err());
    }

    #[test]
    fn test_enforces_character_limits() {
        let thirty = "a".repeat(30);
        assert!(AdElement::new(ElementKind::Headline, thirty.as_str()).is_ok());

        let err = AdElement::new(ElementKind::Headline, "a".repeat(31)).unwrap_err();
        assert_eq!(
            err,
            ElementError::TooLong {
                kind: ElementKind::Headline,
                chars: 31,
                max: 30
            }
        );
        assert_eq!(err.to_string(), "headline is 31 characters, limit is 30");

        assert!(AdElement::new(ElementKind::Callout, "c".repeat(26)).is_err());
        assert!(AdElement::new(ElementKind::Description, "d".repeat(90)).is_ok());
        assert!(AdElement::new(ElementKind::Sitelink, "s".repeat(200)).is_ok());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 30 characters, 60 bytes.
        let text = "é".repeat(30);
        assert!(AdElement::new(ElementKind::Headline, text).is_ok());
    }

    #[test]
    fn test_validated_pool_preserves_order() {
        let pool = ContentPool {
            headlines: vec![
                "First".to_string(),
                "".to_string(),
                "x".repeat(40),
                "Second".to_string(),
            ],
            descriptions: vec!["Only description".to_string()],
            sitelinks: vec![" ".to_string()],
            callouts: vec![],
        };
        let valid = pool.validated();
        let headlines: Vec<&str> = valid.headlines.iter().map(AdElement::text).collect();
        assert_eq!(headlines, vec!["First", "Second"]);
        assert_eq!(valid.descriptions.len(), 1);
        assert!(valid.of(ElementKind::Sitelink).is_empty());
    }
}
