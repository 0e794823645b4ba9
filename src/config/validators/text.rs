use super::{raw, Validator};
use crate::config::{Case, ConfigError, Property};

/// Accepts any string, including the empty one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringValidator {
    case: Case,
}

pub fn string() -> StringValidator {
    StringValidator::default()
}

impl StringValidator {
    pub fn folded(mut self, case: Case) -> Self {
        self.case = case;
        self
    }
}

impl Validator for StringValidator {
    type Output = String;

    fn validate(&self, property: &mut Property) -> Result<String, ConfigError> {
        Ok(property.fold(self.case).to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyValidator {
    case: Case,
}

pub fn non_empty_string() -> NonEmptyValidator {
    NonEmptyValidator::default()
}

impl NonEmptyValidator {
    pub fn folded(mut self, case: Case) -> Self {
        self.case = case;
        self
    }
}

impl Validator for NonEmptyValidator {
    type Output = String;

    fn validate(&self, property: &mut Property) -> Result<String, ConfigError> {
        if raw(property).is_empty() {
            return Err(ConfigError::invalid(format!(
                "{} contains an empty string",
                property.name()
            )));
        }
        Ok(property.fold(self.case).to_string())
    }
}

/// Accepts `1`/`0` and, ignoring case, `true`/`false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

pub fn boolean() -> BooleanValidator {
    BooleanValidator
}

impl Validator for BooleanValidator {
    type Output = bool;

    fn validate(&self, property: &mut Property) -> Result<bool, ConfigError> {
        let value = raw(property);
        match value {
            "1" => Ok(true),
            "0" => Ok(false),
            v if v.eq_ignore_ascii_case("true") => Ok(true),
            v if v.eq_ignore_ascii_case("false") => Ok(false),
            v => Err(ConfigError::invalid(format!(
                "{} has to be of type \"1\" (true) or \"0\" (false), currently is ({v})",
                property.name()
            ))),
        }
    }
}

/// Accepts members of a fixed set, compared after case folding.
#[derive(Debug, Clone)]
pub struct OneOfValidator {
    allowed: Vec<String>,
    case: Case,
}

pub fn one_of<I, S>(allowed: I, case: Case) -> OneOfValidator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOfValidator {
        allowed: allowed.into_iter().map(Into::into).collect(),
        case,
    }
}

impl Validator for OneOfValidator {
    type Output = String;

    fn validate(&self, property: &mut Property) -> Result<String, ConfigError> {
        let value = property.fold(self.case).to_string();
        if self.allowed.contains(&value) {
            return Ok(value);
        }
        Err(ConfigError::invalid(format!(
            "{} has to be of type {}, currently is ({value})",
            property.name(),
            self.allowed.join(",")
        )))
    }
}

/// Splits a non-empty value on a separator.
#[derive(Debug, Clone, Copy)]
pub struct ListValidator {
    separator: char,
    case: Case,
}

pub fn string_list(separator: char) -> ListValidator {
    ListValidator {
        separator,
        case: Case::Keep,
    }
}

impl ListValidator {
    pub fn folded(mut self, case: Case) -> Self {
        self.case = case;
        self
    }
}

impl Validator for ListValidator {
    type Output = Vec<String>;

    fn validate(&self, property: &mut Property) -> Result<Vec<String>, ConfigError> {
        if raw(property).is_empty() {
            return Err(ConfigError::invalid(format!(
                "{} has to be a {} delimited string list, currently is ()",
                property.name(),
                self.separator
            )));
        }
        Ok(property
            .fold(self.case)
            .split(self.separator)
            .map(str::to_string)
            .collect())
    }
}
