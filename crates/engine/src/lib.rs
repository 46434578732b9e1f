//! Ad variation engine: rates responsive-search-ad element sets on a 0-100
//! strength scale, flags compliance risks in ad copy, and samples unique,
//! compliant, high-scoring variations from a content library.

pub mod compliance;
pub mod element;
pub mod generator;
pub mod patterns;
pub mod random;
pub mod scorer;
pub mod types;

pub use compliance::{check_compliance, check_display_compliance, has_errors, ComplianceChecker};
pub use element::{AdElement, ElementError, ElementKind, ValidatedPool};
pub use generator::{generate_variations, GenerationOptions, GenerationOutcome, VariationGenerator};
pub use patterns::{analyze_headlines, detect_pattern, position_recommendation};
pub use random::RandomSource;
pub use scorer::{score, QualityScorer};
pub use types::*;
