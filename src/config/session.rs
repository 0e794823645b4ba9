use std::fmt;

use serde::Serialize;

use super::core_config::CoreConfig;
use super::env::ProcessEnv;
use super::exit::{ProcessTerminator, Terminator};
use super::optional::OptionalityRule;
use super::property::Property;
use super::resolve::interpolate;
use super::source::EnvSource;
use super::validators::Validator;
use super::{ConfigError, SessionBuilder};

/// What a declaration falls back to when its key is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fallback<T> {
    /// The key must be present.
    #[default]
    Required,
    /// Absence yields this value, unvalidated.
    Literal(T),
    /// Requiredness depends on the deployment context; absence never yields
    /// a value.
    Rule(OptionalityRule),
}

/// One configuration pass over an environment.
///
/// Declarations never fail: missing keys and invalid values are collected and
/// surfaced once by [`validate`](Self::validate). A session is not meant to be
/// shared between concurrent passes.
///
/// ## Example
///
/// ```no_run
/// use econf::config::{validators, Fallback, Session};
///
/// let mut session = Session::builder().with_prefix("MYAPP").build();
/// session.init_core();
/// let port = session.declare("PORT", validators::port(), Fallback::Literal(8080));
/// let api = session.declare_interpolated("API_URL", validators::url(), Fallback::Required, true);
/// session.validate(true);
/// # let _ = (port, api);
/// ```
#[derive(Debug)]
pub struct Session {
    pub(super) prefix: Option<String>,
    pub(super) env: Box<dyn EnvSource>,
    pub(super) ambient: Box<dyn EnvSource>,
    pub(super) terminator: Box<dyn Terminator>,
    pub(super) core: Option<CoreConfig>,
    missing: Vec<String>,
    invalid: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session without prefix reading the process environment.
    pub fn new() -> Self {
        Self::from_parts(None, Box::new(ProcessEnv), Box::new(ProcessEnv), Box::new(ProcessTerminator))
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub(super) fn from_parts(
        prefix: Option<String>,
        env: Box<dyn EnvSource>,
        ambient: Box<dyn EnvSource>,
        terminator: Box<dyn Terminator>,
    ) -> Self {
        Self {
            prefix: prefix.filter(|p| !p.is_empty()),
            env,
            ambient,
            terminator,
            core: None,
            missing: Vec::new(),
            invalid: Vec::new(),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Settings from the last [`init_core`](Self::init_core) call.
    pub fn core(&self) -> Option<&CoreConfig> {
        self.core.as_ref()
    }

    /// Rebinds the primary mapping. The interpolation mapping is unchanged.
    pub fn set_env(&mut self, env: impl EnvSource + 'static) {
        self.env = Box::new(env);
    }

    pub fn missing_properties(&self) -> &[String] {
        &self.missing
    }

    pub fn invalid_property_values(&self) -> &[String] {
        &self.invalid
    }

    /// Clears both error lists.
    pub fn reset(&mut self) {
        self.missing.clear();
        self.invalid.clear();
    }

    /// Reads `name` (prefixed) and converts it with `validator`.
    ///
    /// Returns `None` when the key is missing and required, when the value is
    /// invalid, or when a [`Fallback::Rule`] made the key optional and it is
    /// absent. A [`Fallback::Literal`] is returned as-is for absent keys.
    pub fn declare<V: Validator>(&mut self, name: &str, validator: V, fallback: Fallback<V::Output>) -> Option<V::Output> {
        self.declare_internal(name, &validator, fallback, None)
    }

    /// Like [`declare`](Self::declare), but first replaces `${NAME}`
    /// references in the raw value from the ambient environment.
    ///
    /// With `must_resolve_all`, any unset reference makes the property
    /// invalid and the validator is skipped; otherwise unset references
    /// become empty strings.
    pub fn declare_interpolated<V: Validator>(
        &mut self,
        name: &str,
        validator: V,
        fallback: Fallback<V::Output>,
        must_resolve_all: bool,
    ) -> Option<V::Output> {
        self.declare_internal(name, &validator, fallback, Some(must_resolve_all))
    }

    fn declare_internal<V: Validator>(
        &mut self,
        name: &str,
        validator: &V,
        fallback: Fallback<V::Output>,
        interpolation: Option<bool>,
    ) -> Option<V::Output> {
        let (required, default) = match fallback {
            Fallback::Required => (true, None),
            Fallback::Literal(value) => (false, Some(value)),
            Fallback::Rule(rule) => (!rule.is_optional(self.core.as_ref()), None),
        };

        let name = self.qualify(name);
        let mut property = Property::resolve(self.env.as_ref(), name, required);

        if property.is_missing() {
            if property.is_required() {
                tracing::debug!(key = property.name(), "required property missing");
                self.missing.push(property.into_name());
                return None;
            }
            tracing::debug!(key = property.name(), "optional property absent, using fallback");
            return default;
        }

        if let Some(must_resolve_all) = interpolation {
            let result = interpolate(property.value().unwrap_or_default(), self.ambient.as_ref(), must_resolve_all);
            if !result.is_complete() {
                let err = ConfigError::UnresolvedReferences {
                    name: property.name().to_string(),
                    references: result.unresolved,
                };
                tracing::warn!(key = property.name(), "unresolved environment references");
                self.invalid.push(err.to_string());
                return None;
            }
            property.set_value(result.value);
        }

        let value = validator.check(Some(&mut property));
        if let Some(message) = property.take_invalid() {
            tracing::debug!(key = property.name(), "property value invalid");
            self.invalid.push(message);
            return None;
        }
        value
    }

    fn qualify(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}_{name}"),
            None => name.to_string(),
        }
    }

    /// Surfaces the errors of the current pass.
    ///
    /// Returns `None` for a clean pass. Otherwise, with `exit_on_error` the
    /// diagnostics are logged and the terminator ends the process; without
    /// it the error lists are returned. Nothing is reset.
    pub fn validate(&self, exit_on_error: bool) -> Option<ValidationReport<'_>> {
        if self.missing.is_empty() && self.invalid.is_empty() {
            return None;
        }

        let report = ValidationReport {
            invalid_property_values: &self.invalid,
            missing_properties: &self.missing,
        };
        if exit_on_error {
            report.log();
            tracing::error!("Process is going to terminate here. Please check the errors above.");
            self.terminator.terminate(1);
        }
        Some(report)
    }
}

/// The error lists of a pass, borrowed from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport<'a> {
    pub invalid_property_values: &'a [String],
    pub missing_properties: &'a [String],
}

impl ValidationReport<'_> {
    pub fn to_errors(&self) -> ValidationErrors {
        ValidationErrors {
            invalid_property_values: self.invalid_property_values.to_vec(),
            missing_properties: self.missing_properties.to_vec(),
        }
    }

    fn log(&self) {
        if !self.invalid_property_values.is_empty() {
            tracing::error!("{}", Section::Invalid(self.invalid_property_values));
            tracing::error!("Please check the .env.sample for the correct values");
        }
        if !self.missing_properties.is_empty() {
            tracing::error!("{}", Section::Missing(self.missing_properties));
            tracing::error!("Please check the .env.sample for the missing properties");
        }
    }
}

impl fmt::Display for ValidationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if !self.invalid_property_values.is_empty() {
            write!(f, "{}", Section::Invalid(self.invalid_property_values))?;
            first = false;
        }
        if !self.missing_properties.is_empty() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", Section::Missing(self.missing_properties))?;
        }
        Ok(())
    }
}

/// Owned copy of a [`ValidationReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub invalid_property_values: Vec<String>,
    pub missing_properties: Vec<String>,
}

impl ValidationErrors {
    pub fn as_report(&self) -> ValidationReport<'_> {
        ValidationReport {
            invalid_property_values: &self.invalid_property_values,
            missing_properties: &self.missing_properties,
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_report(), f)
    }
}

enum Section<'a> {
    Invalid(&'a [String]),
    Missing(&'a [String]),
}

impl fmt::Display for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (heading, items) = match self {
            Section::Invalid(items) => ("The following properties are invalid in the environment (.env file):", items),
            Section::Missing(items) => (
                "The following properties are missing (or invalid) in the environment (.env file):",
                items,
            ),
        };
        f.write_str(heading)?;
        for item in items.iter() {
            write!(f, "\n - {item}")?;
        }
        Ok(())
    }
}
