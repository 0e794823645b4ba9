use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{0}")]
    InvalidValue(String),

    #[error(
        "{name} requires the following environment variable(s) {} which were not available.",
        .references.join(" ")
    )]
    UnresolvedReferences {
        name: String,
        references: Vec<String>,
    },

    #[error("failed to load env file '{path}': {source}")]
    Dotenv {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_message_joins_tokens() {
        let err = ConfigError::UnresolvedReferences {
            name: "TEST_URL".into(),
            references: vec!["${A}".into(), "${B}".into()],
        };
        assert_eq!(
            err.to_string(),
            "TEST_URL requires the following environment variable(s) ${A} ${B} which were not available."
        );
    }
}
