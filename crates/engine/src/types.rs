use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Candidate ad copy supplied by the content library. The engine only reads
/// these snapshots; blank and over-length entries are filtered on use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPool {
    #[serde(default)]
    pub headlines: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub sitelinks: Vec<String>,
    #[serde(default)]
    pub callouts: Vec<String>,
}

/// Coarse qualitative bucket derived from a 0-100 strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Poor,
    Average,
    Good,
    Excellent,
}

impl StrengthTier {
    /// Poor below 40, average 40-59, good 60-79, excellent from 80 up.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=39 => StrengthTier::Poor,
            40..=59 => StrengthTier::Average,
            60..=79 => StrengthTier::Good,
            _ => StrengthTier::Excellent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Poor => "poor",
            StrengthTier::Average => "average",
            StrengthTier::Good => "good",
            StrengthTier::Excellent => "excellent",
        }
    }
}

/// Per-category contribution to the strength score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0-40.
    pub headlines: u32,
    /// 0-30.
    pub descriptions: u32,
    /// 0-15.
    pub sitelinks: u32,
    /// 0-15.
    pub callouts: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.headlines + self.descriptions + self.sitelinks + self.callouts
    }
}

/// Result of rating one element set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub score: u32,
    pub strength: StrengthTier,
    /// At most five, in the order they were raised.
    pub suggestions: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Kind of risk a compliance rule detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceIssueType {
    ProhibitedWord,
    ExcessiveCaps,
    CharacterLimit,
    EntitySpecific,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceSeverity {
    Error,
    Warning,
}

/// A flagged risk in ad text. Errors block generation; warnings are advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    #[serde(rename = "type")]
    pub issue_type: ComplianceIssueType,
    pub severity: ComplianceSeverity,
    pub message: String,
    /// Offending field, e.g. `headlines[3]`, or `all` for set-wide rules.
    pub field: String,
}

impl ComplianceIssue {
    pub fn is_error(&self) -> bool {
        self.severity == ComplianceSeverity::Error
    }
}

/// Rhetorical pattern of a single headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Question,
    CallToAction,
    Number,
    Benefit,
    Emotional,
    None,
}

impl PatternType {
    /// Expected click-through lift, in percent.
    pub fn boost(&self) -> u32 {
        match self {
            PatternType::Question => 20,
            PatternType::CallToAction => 25,
            PatternType::Number => 15,
            PatternType::Benefit => 10,
            PatternType::Emotional => 10,
            PatternType::None => 0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PatternType::Question => "Questions invite the reader to answer in their head",
            PatternType::CallToAction => "Action verbs tell the reader what to do next",
            PatternType::Number => "Specific numbers make claims concrete",
            PatternType::Benefit => "Benefit words highlight what the reader gains",
            PatternType::Emotional => "Emotional and trust words build credibility",
            PatternType::None => "No recognised headline pattern",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlinePattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    /// The token that triggered the match (`?`, a word, or a number); empty for `none`.
    pub indicator: String,
    pub description: String,
    pub boost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecommendation {
    pub message: String,
    pub is_optimal: bool,
}

/// Pattern and placement advice for one headline in an ordered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineInsight {
    pub position: usize,
    pub headline: String,
    pub pattern: HeadlinePattern,
    pub recommendation: Option<PositionRecommendation>,
}

/// Display-ad creative checked by the display compliance rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAd {
    #[serde(default)]
    pub long_headline: String,
    #[serde(default)]
    pub short_headlines: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default)]
    pub entity: Option<String>,
}

/// One generated, ready-to-use ad. Created only by the variation generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdVariation {
    pub id: Uuid,
    pub headlines: Vec<String>,
    pub descriptions: Vec<String>,
    pub sitelinks: Vec<String>,
    pub callouts: Vec<String>,
    pub score: u32,
    pub strength: StrengthTier,
}
