use crate::config::{ConfigError, ValidationErrors};
use thiserror::Error;

/// Top-level error type for the econf library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("environment configuration is incomplete:\n{0}")]
    Validation(ValidationErrors),

    #[error("application context requires a core configuration")]
    MissingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnv;

    fn load(path: &str) -> Result<MapEnv, Error> {
        Ok(MapEnv::from_dotenv(path)?)
    }

    #[test]
    fn test_config_error_converts() {
        let err = load("/nonexistent/.env").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Dotenv { .. })));
        assert!(err.to_string().starts_with("configuration error: failed to load env file '/nonexistent/.env'"));
    }

    #[test]
    fn test_validation_error_lists_problems() {
        let err = Error::Validation(ValidationErrors {
            invalid_property_values: vec![],
            missing_properties: vec!["APP_KEY".into()],
        });
        assert!(err.to_string().ends_with(" - APP_KEY"));
    }
}
