//! The fixed bundle of settings every application shares.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validators::{boolean, date, one_of, string};
use super::{Case, Fallback, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnvironment {
    Development,
    Staging,
    Production,
}

impl DeploymentEnvironment {
    pub const ALL: [Self; 3] = [Self::Development, Self::Staging, Self::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Returned when a string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

macro_rules! lowercase_enum_str {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| UnknownVariant(s.to_string()))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

lowercase_enum_str!(DeploymentEnvironment);
lowercase_enum_str!(LogLevel);

/// Core settings. A field is `None` when its key was missing or invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    /// `VERSION_BUILD_DATE`
    pub version_build_date: Option<DateTime<Utc>>,
    /// `VERSION_TAG`
    pub version_tag: Option<String>,
    /// `ENVIRONMENT`
    pub environment: Option<DeploymentEnvironment>,
    /// `LOG_LEVEL`
    pub log_level: Option<LogLevel>,
    /// `LOG_TO_CONSOLE`
    pub log_to_console: Option<bool>,
    /// `DEVELOPMENT`, defaults to `false`
    pub development: Option<bool>,
}

impl Session {
    /// Starts a fresh pass: clears both error lists and declares the core
    /// settings.
    pub fn init_core(&mut self) {
        self.reset();

        let environments = DeploymentEnvironment::ALL.map(|e| e.as_str());
        let levels = LogLevel::ALL.map(|l| l.as_str());

        let core = CoreConfig {
            version_build_date: self.declare("VERSION_BUILD_DATE", date(), Fallback::Required),
            version_tag: self.declare("VERSION_TAG", string(), Fallback::Required),
            environment: self
                .declare("ENVIRONMENT", one_of(environments, Case::Lower), Fallback::Required)
                .and_then(|s| s.parse().ok()),
            log_level: self
                .declare("LOG_LEVEL", one_of(levels, Case::Lower), Fallback::Required)
                .and_then(|s| s.parse().ok()),
            log_to_console: self.declare("LOG_TO_CONSOLE", boolean(), Fallback::Required),
            development: self.declare("DEVELOPMENT", boolean(), Fallback::Literal(false)),
        };
        tracing::debug!(?core, "core configuration loaded");
        self.core = Some(core);
    }
}
