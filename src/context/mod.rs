//! Application context holding the validated configuration.

use crate::config::{CoreConfig, Session};
use crate::Error;

/// An application configuration declared against a [`Session`].
///
/// Implementations call [`Session::declare`] and friends for each of their
/// keys. Failed declarations yield `None`; the context only hands out the
/// result once the whole pass validated cleanly.
pub trait FromSession: Sized {
    fn from_session(session: &mut Session) -> Self;
}

impl FromSession for () {
    fn from_session(_session: &mut Session) {}
}

/// Central application context holding the core settings and the
/// application's own configuration `C`.
///
/// ## Example
///
/// ```no_run
/// use econf::config::{validators, Fallback, Session};
/// use econf::{AppContext, FromSession};
///
/// struct MyConfig {
///     port: Option<u16>,
/// }
///
/// impl FromSession for MyConfig {
///     fn from_session(session: &mut Session) -> Self {
///         Self {
///             port: session.declare("PORT", validators::port(), Fallback::Literal(8080)),
///         }
///     }
/// }
///
/// let ctx = AppContext::builder()
///     .with_session(Session::builder().with_prefix("MYAPP").build())
///     .build::<MyConfig>()?;
///
/// let port = ctx.config().port;
/// # Ok::<(), econf::Error>(())
/// ```
#[derive(Debug)]
pub struct AppContext<C> {
    core: CoreConfig,
    config: C,
}

impl<C> AppContext<C> {
    pub fn core(&self) -> &CoreConfig {
        &self.core
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn into_parts(self) -> (CoreConfig, C) {
        (self.core, self.config)
    }
}

impl AppContext<()> {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder { session: None }
    }
}

/// Builder for constructing an [`AppContext`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder {
    session: Option<Session>,
}

impl AppContextBuilder {
    /// Attaches the session the configuration is read from.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Runs a full pass: core settings, then `C`'s declarations, then the
    /// validation gate in non-fatal mode.
    ///
    /// Returns [`Error::Validation`] with every collected problem if any key
    /// was missing or invalid.
    pub fn build<C: FromSession>(self) -> Result<AppContext<C>, Error> {
        let mut session = self.session.ok_or(Error::MissingConfig)?;
        session.init_core();
        let config = C::from_session(&mut session);

        if let Some(report) = session.validate(false) {
            return Err(Error::Validation(report.to_errors()));
        }
        let core = session.core().cloned().ok_or(Error::MissingConfig)?;
        tracing::info!(
            environment = ?core.environment,
            version = core.version_tag.as_deref().unwrap_or_default(),
            "configuration loaded"
        );
        Ok(AppContext { core, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validators::{port, string_list, url};
    use crate::config::{DeploymentEnvironment, Fallback, MapEnv, OptionalityRule};
    use url::Url;

    #[derive(Debug)]
    struct ServiceConfig {
        port: Option<u16>,
        upstream: Option<Url>,
        hosts: Option<Vec<String>>,
    }

    impl FromSession for ServiceConfig {
        fn from_session(session: &mut Session) -> Self {
            Self {
                port: session.declare("PORT", port(), Fallback::Literal(8080)),
                upstream: session.declare("UPSTREAM", url(), Fallback::Required),
                hosts: session.declare(
                    "HOSTS",
                    string_list(','),
                    Fallback::Rule(OptionalityRule::LOCAL_DEVELOPMENT),
                ),
            }
        }
    }

    fn core_env() -> MapEnv {
        MapEnv::new()
            .with("SVC_VERSION_BUILD_DATE", "2021-05-23")
            .with("SVC_VERSION_TAG", "2.1.0")
            .with("SVC_ENVIRONMENT", "staging")
            .with("SVC_LOG_LEVEL", "info")
            .with("SVC_LOG_TO_CONSOLE", "false")
    }

    fn build(env: MapEnv) -> Result<AppContext<ServiceConfig>, Error> {
        AppContext::builder()
            .with_session(Session::builder().with_prefix("SVC").with_env(env).build())
            .build()
    }

    #[test]
    fn test_context_builds_from_clean_pass() {
        let env = core_env()
            .with("SVC_UPSTREAM", "http://upstream.local:9000")
            .with("SVC_HOSTS", "a,b");
        let ctx = build(env).unwrap();

        assert_eq!(ctx.core().environment, Some(DeploymentEnvironment::Staging));
        assert_eq!(ctx.config().port, Some(8080));
        assert_eq!(ctx.config().upstream.as_ref().map(Url::as_str), Some("http://upstream.local:9000/"));
        assert_eq!(ctx.config().hosts, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_context_collects_all_errors() {
        let env = core_env().with("SVC_PORT", "70000");
        let err = build(env).unwrap_err();

        match err {
            Error::Validation(errors) => {
                assert_eq!(
                    errors.invalid_property_values,
                    ["SVC_PORT has to be within [0, 65535], currently is (70000)"]
                );
                assert_eq!(errors.missing_properties, ["SVC_UPSTREAM", "SVC_HOSTS"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_local_development_relaxes_rule() {
        let env = core_env()
            .with("SVC_DEVELOPMENT", "1")
            .with("SVC_UPSTREAM", "http://localhost");
        let ctx = build(env).unwrap();
        assert_eq!(ctx.config().hosts, None);
        assert_eq!(ctx.core().development, Some(true));
    }

    #[test]
    fn test_missing_session() {
        let result = AppContext::builder().build::<()>();
        assert!(matches!(result, Err(Error::MissingConfig)));
    }
}
