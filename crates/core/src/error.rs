use thiserror::Error;

pub type AdcraftResult<T> = Result<T, AdcraftError>;

#[derive(Error, Debug)]
pub enum AdcraftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for AdcraftError {
    fn from(err: config::ConfigError) -> Self {
        AdcraftError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdcraftError::InvalidInput("pool has no headlines".to_string());
        assert_eq!(err.to_string(), "Invalid input: pool has no headlines");

        let err: AdcraftError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_config_error_maps_to_config_variant() {
        let err: AdcraftError = config::ConfigError::NotFound("generator".to_string()).into();
        assert!(matches!(err, AdcraftError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
