//! Per-deployment tolerance for absent keys.

use super::core_config::{CoreConfig, DeploymentEnvironment};

/// Where the process is running, derived from the core settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentContext {
    LocalDevelopment,
    Development,
    Staging,
    Production,
}

impl DeploymentContext {
    /// The local development flag wins over the environment setting.
    /// Returns `None` when neither is known.
    pub fn from_core(core: &CoreConfig) -> Option<Self> {
        if core.development == Some(true) {
            return Some(Self::LocalDevelopment);
        }
        core.environment.map(|env| match env {
            DeploymentEnvironment::Development => Self::Development,
            DeploymentEnvironment::Staging => Self::Staging,
            DeploymentEnvironment::Production => Self::Production,
        })
    }
}

/// Whether a key may be absent, per deployment context.
///
/// Passed in place of a default value; it never supplies a value itself,
/// only decides whether the key is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalityRule {
    local_development: bool,
    development: bool,
    staging: bool,
    production: bool,
}

impl OptionalityRule {
    /// Optional in local development, mandatory everywhere else.
    pub const LOCAL_DEVELOPMENT: Self = Self::new(true, false, false, false);

    /// Optional in deployed environments, mandatory in local development.
    pub const PRODUCTION: Self = Self::new(false, true, true, true);

    pub const fn new(local_development: bool, development: bool, staging: bool, production: bool) -> Self {
        Self {
            local_development,
            development,
            staging,
            production,
        }
    }

    pub fn tolerates(&self, context: DeploymentContext) -> bool {
        match context {
            DeploymentContext::LocalDevelopment => self.local_development,
            DeploymentContext::Development => self.development,
            DeploymentContext::Staging => self.staging,
            DeploymentContext::Production => self.production,
        }
    }

    /// Without core settings, or with an unknown context, the key is mandatory.
    pub fn is_optional(&self, core: Option<&CoreConfig>) -> bool {
        core.and_then(DeploymentContext::from_core)
            .is_some_and(|context| self.tolerates(context))
    }
}
