use super::env::ProcessEnv;
use super::exit::{ProcessTerminator, Terminator};
use super::session::Session;
use super::source::EnvSource;

/// Builder for a [`Session`].
///
/// Two mappings are bound separately: the primary environment, where
/// declared keys are looked up, and the ambient environment, which only
/// serves `${NAME}` interpolation. Both default to the process environment,
/// so a test can substitute the primary mapping and still resolve machine
/// variables.
///
/// ## Example
///
/// ```no_run
/// use econf::config::{MapEnv, Session};
///
/// let session = Session::builder()
///     .with_prefix("MYAPP")
///     .with_env(MapEnv::from_dotenv(".env")?)
///     .build();
/// # Ok::<(), econf::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct SessionBuilder {
    prefix: Option<String>,
    env: Option<Box<dyn EnvSource>>,
    ambient: Option<Box<dyn EnvSource>>,
    terminator: Option<Box<dyn Terminator>>,
}

impl SessionBuilder {
    /// Prepends `PREFIX_` to every declared key. An empty prefix is ignored.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the mapping declared keys are read from.
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    /// Sets the mapping `${NAME}` references are resolved against.
    pub fn with_ambient(mut self, ambient: impl EnvSource + 'static) -> Self {
        self.ambient = Some(Box::new(ambient));
        self
    }

    /// Replaces process exit on the fatal validation path.
    pub fn with_terminator(mut self, terminator: impl Terminator + 'static) -> Self {
        self.terminator = Some(Box::new(terminator));
        self
    }

    pub fn build(self) -> Session {
        Session::from_parts(
            self.prefix,
            self.env.unwrap_or_else(|| Box::new(ProcessEnv)),
            self.ambient.unwrap_or_else(|| Box::new(ProcessEnv)),
            self.terminator.unwrap_or_else(|| Box::new(ProcessTerminator)),
        )
    }
}
