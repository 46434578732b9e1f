//! adcraft — score, check and generate search-ad variations from the command line.
//!
//! Reads a content pool as JSON (a file path or `-` for stdin) and writes
//! JSON results to stdout. Logs go to stderr.

use std::io::Read;

use adcraft_core::config::AppConfig;
use adcraft_core::{AdcraftError, AdcraftResult};
use adcraft_engine::{
    analyze_headlines, check_compliance, score, AdVariation, ComplianceChecker, ContentPool,
    DisplayAd, GenerationOptions, VariationGenerator,
};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "adcraft")]
#[command(about = "Ad strength scoring, compliance checks and variation generation")]
#[command(version)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a content pool as a single ad
    Score {
        /// Content pool JSON file, or `-` for stdin
        #[arg(short, long)]
        input: String,
    },

    /// Run compliance checks over a content pool
    Check {
        #[arg(short, long)]
        input: String,

        /// Jurisdiction code, e.g. UK or UAE (overrides config)
        #[arg(short, long, env = "ADCRAFT__DEFAULT_ENTITY")]
        entity: Option<String>,
    },

    /// Detect headline patterns and placement advice
    Patterns {
        #[arg(short, long)]
        input: String,
    },

    /// Generate scored ad variations
    Generate {
        #[arg(short, long)]
        input: String,

        #[arg(short, long, env = "ADCRAFT__DEFAULT_ENTITY")]
        entity: Option<String>,

        /// Maximum variations to return (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        /// Minimum accepted score (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        min_score: Option<i64>,

        /// Seed for reproducible output; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check a display ad JSON document
    Display {
        #[arg(short, long)]
        input: String,
    },
}

/// Output of the `generate` command.
#[derive(Debug, Serialize)]
struct GenerationReport {
    generated_at: DateTime<Utc>,
    entity: Option<String>,
    seed: u64,
    attempts: usize,
    variations: Vec<AdVariation>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    match cli.command {
        Commands::Score { input } => {
            let pool: ContentPool = load_input(&input).context("reading content pool")?;
            let report = score(
                &pool.headlines,
                &pool.descriptions,
                &pool.sitelinks,
                &pool.callouts,
            );
            info!(score = report.score, strength = report.strength.label(), "scored pool");
            print_json(&report)
        }
        Commands::Check { input, entity } => {
            let pool: ContentPool = load_input(&input).context("reading content pool")?;
            let entity = entity.or(config.default_entity);
            let issues = check_compliance(
                &pool.headlines,
                &pool.descriptions,
                &pool.sitelinks,
                &pool.callouts,
                entity.as_deref(),
            );
            info!(issues = issues.len(), "compliance check complete");
            print_json(&issues)
        }
        Commands::Patterns { input } => {
            let pool: ContentPool = load_input(&input).context("reading content pool")?;
            print_json(&analyze_headlines(&pool.headlines))
        }
        Commands::Generate {
            input,
            entity,
            max,
            min_score,
            seed,
        } => {
            let pool: ContentPool = load_input(&input).context("reading content pool")?;
            let entity = entity.or(config.default_entity);

            let options =
                apply_overrides(GenerationOptions::from(&config.generator), max, min_score);

            let seed = seed.unwrap_or_else(rand::random);
            let mut rng = StdRng::seed_from_u64(seed);
            info!(
                seed,
                max_variations = options.max_variations,
                min_score = options.min_score,
                entity = entity.as_deref().unwrap_or("-"),
                "generating variations"
            );

            let outcome =
                VariationGenerator::new(options).generate(&pool, entity.as_deref(), &mut rng);
            print_json(&GenerationReport {
                generated_at: Utc::now(),
                entity,
                seed,
                attempts: outcome.attempts,
                variations: outcome.variations,
            })
        }
        Commands::Display { input } => {
            let ad: DisplayAd = load_input(&input).context("reading display ad")?;
            print_json(&ComplianceChecker::new().check_display(&ad))
        }
    }
}

/// Apply `--max`/`--min-score` on top of configured options. Negative flags
/// clamp to zero; unset flags keep the configured value.
fn apply_overrides(
    mut options: GenerationOptions,
    max: Option<i64>,
    min_score: Option<i64>,
) -> GenerationOptions {
    if max.is_none() && min_score.is_none() {
        return options;
    }
    let overrides = GenerationOptions::from_signed(
        max.unwrap_or_else(|| i64::try_from(options.max_variations).unwrap_or(i64::MAX)),
        min_score.unwrap_or(i64::from(options.min_score)),
    );
    if max.is_some() {
        options.max_variations = overrides.max_variations;
    }
    options.min_score = overrides.min_score;
    options
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "adcraft=info,adcraft_engine=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Read and parse a JSON document from a path, or stdin when `path` is `-`.
fn load_input<T: DeserializeOwned>(path: &str) -> AdcraftResult<T> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    if raw.trim().is_empty() {
        return Err(AdcraftError::InvalidInput(format!("{path} is empty")));
    }
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_configured_options() {
        let configured = GenerationOptions {
            max_variations: 12,
            min_score: 70,
            attempts_per_variation: 4,
        };
        assert_eq!(apply_overrides(configured, None, None), configured);
    }

    #[test]
    fn test_large_configured_max_survives_min_score_flag() {
        let configured = GenerationOptions {
            max_variations: usize::MAX,
            ..GenerationOptions::default()
        };
        let options = apply_overrides(configured, None, Some(80));
        assert_eq!(options.max_variations, usize::MAX);
        assert_eq!(options.min_score, 80);
    }

    #[test]
    fn test_negative_flags_clamp_to_zero() {
        let options = apply_overrides(GenerationOptions::default(), Some(-5), Some(-1));
        assert_eq!(options.max_variations, 0);
        assert_eq!(options.min_score, 0);
        assert_eq!(
            options.attempts_per_variation,
            GenerationOptions::default().attempts_per_variation
        );
    }
}
