use std::collections::HashSet;

use adcraft_core::config::GeneratorConfig;
use tracing::{debug, info};

use crate::compliance::{has_errors, ComplianceChecker};
use crate::element::{AdElement, ElementKind};
use crate::random::RandomSource;
use crate::scorer::QualityScorer;
use crate::types::{AdVariation, ContentPool};

pub const DEFAULT_MAX_VARIATIONS: usize = 10;
pub const DEFAULT_MIN_SCORE: u32 = 60;
/// Sampling attempts budgeted per requested variation. Generation stops after
/// `max_variations * attempts_per_variation` draws even if fewer were accepted.
pub const DEFAULT_ATTEMPTS_PER_VARIATION: usize = 10;

const MIN_HEADLINES: usize = 3;
const MIN_DESCRIPTIONS: usize = 2;

/// Draw order of the categories; also the order of the combination key.
const KINDS: [ElementKind; 4] = [
    ElementKind::Headline,
    ElementKind::Description,
    ElementKind::Sitelink,
    ElementKind::Callout,
];

const ITEM_SEPARATOR: &str = "\u{1f}";
const CATEGORY_SEPARATOR: &str = "\u{1e}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub max_variations: usize,
    pub min_score: u32,
    pub attempts_per_variation: usize,
}

impl GenerationOptions {
    /// Build options from untrusted signed input, treating negatives as zero.
    pub fn from_signed(max_variations: i64, min_score: i64) -> Self {
        Self {
            max_variations: usize::try_from(max_variations.max(0)).unwrap_or(usize::MAX),
            min_score: u32::try_from(min_score.max(0)).unwrap_or(u32::MAX),
            ..Self::default()
        }
    }

    /// Upper bound on sampling attempts for one run.
    pub fn max_attempts(&self) -> usize {
        self.max_variations
            .saturating_mul(self.attempts_per_variation)
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_variations: DEFAULT_MAX_VARIATIONS,
            min_score: DEFAULT_MIN_SCORE,
            attempts_per_variation: DEFAULT_ATTEMPTS_PER_VARIATION,
        }
    }
}

impl From<&GeneratorConfig> for GenerationOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            max_variations: config.max_variations,
            min_score: config.min_score,
            attempts_per_variation: config.attempts_per_variation,
        }
    }
}

/// Accepted variations plus counters describing how the run went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Sorted by score, highest first; ties keep acceptance order.
    pub variations: Vec<AdVariation>,
    pub attempts: usize,
    pub rejected_duplicate: usize,
    pub rejected_compliance: usize,
    pub rejected_score: usize,
}

/// Samples ad variations from a content pool by rejection sampling.
///
/// Each attempt draws a random subset of every category, then discards it if
/// the exact element sets were already accepted, if compliance reports an
/// error, or if the quality score falls below the threshold.
#[derive(Debug, Clone, Default)]
pub struct VariationGenerator {
    options: GenerationOptions,
    scorer: QualityScorer,
    checker: ComplianceChecker,
}

impl VariationGenerator {
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            scorer: QualityScorer::new(),
            checker: ComplianceChecker::new(),
        }
    }

    /// Run one generation pass. Pools with fewer than 3 valid headlines or
    /// 2 valid descriptions produce an empty outcome.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        pool: &ContentPool,
        entity: Option<&str>,
        rng: &mut R,
    ) -> GenerationOutcome {
        let valid = pool.validated();
        let mut outcome = GenerationOutcome::default();

        if valid.headlines.len() < MIN_HEADLINES || valid.descriptions.len() < MIN_DESCRIPTIONS {
            debug!(
                headlines = valid.headlines.len(),
                descriptions = valid.descriptions.len(),
                "not enough valid content to generate variations"
            );
            return outcome;
        }

        let max_variations = self.options.max_variations;
        let max_attempts = self.options.max_attempts();
        let mut seen: HashSet<String> = HashSet::new();

        while outcome.variations.len() < max_variations && outcome.attempts < max_attempts {
            outcome.attempts += 1;

            let sizes = KINDS.map(|kind| draw_size(rng, kind, valid.of(kind).len()));
            let [headlines, descriptions, sitelinks, callouts] = [0, 1, 2, 3]
                .map(|i| sample(rng, valid.of(KINDS[i]), sizes[i]));

            let key = combination_key(&[&headlines, &descriptions, &sitelinks, &callouts]);
            if seen.contains(&key) {
                outcome.rejected_duplicate += 1;
                continue;
            }

            let issues = self
                .checker
                .check(&headlines, &descriptions, &sitelinks, &callouts, entity);
            if has_errors(&issues) {
                debug!(attempt = outcome.attempts, "sample rejected by compliance");
                outcome.rejected_compliance += 1;
                continue;
            }

            let report = self
                .scorer
                .score(&headlines, &descriptions, &sitelinks, &callouts);
            if report.score < self.options.min_score {
                outcome.rejected_score += 1;
                continue;
            }

            seen.insert(key);
            outcome.variations.push(AdVariation {
                id: rng.uuid(),
                headlines,
                descriptions,
                sitelinks,
                callouts,
                score: report.score,
                strength: report.strength,
            });
        }

        // Stable sort keeps acceptance order among equal scores.
        outcome.variations.sort_by(|a, b| b.score.cmp(&a.score));

        info!(
            accepted = outcome.variations.len(),
            attempts = outcome.attempts,
            rejected_duplicate = outcome.rejected_duplicate,
            rejected_compliance = outcome.rejected_compliance,
            rejected_score = outcome.rejected_score,
            "variation generation complete"
        );

        outcome
    }
}

/// Generate variations with the given options. See [`VariationGenerator`].
pub fn generate_variations<R: RandomSource + ?Sized>(
    pool: &ContentPool,
    entity: Option<&str>,
    options: &GenerationOptions,
    rng: &mut R,
) -> Vec<AdVariation> {
    VariationGenerator::new(*options)
        .generate(pool, entity, rng)
        .variations
}

/// Smallest and largest subset drawn per category.
fn sample_bounds(kind: ElementKind) -> (usize, usize) {
    match kind {
        ElementKind::Headline => (MIN_HEADLINES, 15),
        ElementKind::Description => (MIN_DESCRIPTIONS, 4),
        ElementKind::Sitelink => (0, 8),
        ElementKind::Callout => (0, 10),
    }
}

/// Subset size in `[min, min(cap, available)]`.
fn draw_size<R: RandomSource + ?Sized>(rng: &mut R, kind: ElementKind, available: usize) -> usize {
    let (min, cap) = sample_bounds(kind);
    let upper = cap.min(available);
    rng.range_inclusive(min.min(upper), upper)
}

/// `count` distinct elements: shuffle the whole pool, then take the prefix.
fn sample<R: RandomSource + ?Sized>(rng: &mut R, pool: &[AdElement], count: usize) -> Vec<String> {
    let mut order: Vec<&AdElement> = pool.iter().collect();
    rng.shuffle(&mut order);
    order
        .into_iter()
        .take(count)
        .map(|element| element.text().to_string())
        .collect()
}

/// Order-independent identity of a draw: each category sorted and joined.
fn combination_key(categories: &[&Vec<String>]) -> String {
    categories
        .iter()
        .map(|items| {
            let mut sorted: Vec<&str> = items.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            sorted.join(ITEM_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(CATEGORY_SEPARATOR)
}
