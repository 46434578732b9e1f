use serde::Deserialize;

use crate::error::AdcraftResult;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ADCRAFT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Jurisdiction applied when a command does not name one.
    #[serde(default)]
    pub default_entity: Option<String>,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_max_variations")]
    pub max_variations: usize,
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    /// Sampling attempts allowed per requested variation.
    #[serde(default = "default_attempts_per_variation")]
    pub attempts_per_variation: usize,
}

// Default functions
fn default_max_variations() -> usize {
    10
}
fn default_min_score() -> u32 {
    60
}
fn default_attempts_per_variation() -> usize {
    10
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_variations: default_max_variations(),
            min_score: default_min_score(),
            attempts_per_variation: default_attempts_per_variation(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_entity: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> AdcraftResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADCRAFT")
                .separator("__")
                .try_parsing(true),
        );
        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> AdcraftResult<Self> {
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
