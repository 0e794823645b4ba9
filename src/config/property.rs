//! A single environment lookup attempt.

use super::source::EnvSource;

/// Case folding applied to a raw value before it is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Case {
    #[default]
    Keep,
    Lower,
    Upper,
}

/// One resolved environment key, carrying its raw value and error state.
///
/// Created fresh for every declaration and consumed by interpolation and the
/// validator. The invalid-value message is set at most once; the first
/// diagnostic wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    required: bool,
    value: Option<String>,
    invalid: Option<String>,
}

impl Property {
    /// Looks `name` up in `env`. No transformation is applied to the value.
    pub fn resolve(env: &dyn EnvSource, name: impl Into<String>, required: bool) -> Self {
        let name = name.into();
        let value = env.get(&name);
        Self {
            name,
            required,
            value,
            invalid: None,
        }
    }

    /// Builds a required property with a known raw value, for running
    /// validators standalone.
    pub fn new(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            required: true,
            value: value.map(Into::into),
            invalid: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Folds the raw value in place and returns the result.
    pub fn fold(&mut self, case: Case) -> &str {
        if let Some(value) = self.value.as_mut() {
            match case {
                Case::Keep => {}
                Case::Lower => *value = value.to_lowercase(),
                Case::Upper => *value = value.to_uppercase(),
            }
        }
        self.value.as_deref().unwrap_or_default()
    }

    pub fn invalid_message(&self) -> Option<&str> {
        self.invalid.as_deref()
    }

    pub fn set_invalid(&mut self, message: impl Into<String>) {
        if self.invalid.is_none() {
            self.invalid = Some(message.into());
        }
    }

    pub(crate) fn into_name(self) -> String {
        self.name
    }

    pub(crate) fn take_invalid(&mut self) -> Option<String> {
        self.invalid.take()
    }
}
