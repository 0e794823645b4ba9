//! Converters from a resolved [`Property`] to a typed value.
//!
//! Each factory returns a small value implementing [`Validator`]. Plain
//! closures of shape `Fn(&mut Property) -> Result<T, ConfigError>` are
//! validators too.

mod date;
mod net;
mod number;
mod path;
mod text;

pub use date::{date, DateValidator};
pub use net::{ip, ipv4, ipv6, url, IpValidator, Ipv4Validator, Ipv6Validator, UrlValidator};
pub use number::{integer, integer_in, port, IntegerValidator, PortValidator, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use path::{file_exists, file_exists_with, folder_exists, folder_exists_with, PathValidator};
pub use text::{
    boolean, non_empty_string, one_of, string, string_list, BooleanValidator, ListValidator, NonEmptyValidator,
    OneOfValidator, StringValidator,
};

use super::{ConfigError, Property};

pub trait Validator {
    type Output;

    /// Converts the property's raw value, which is known to be present.
    fn validate(&self, property: &mut Property) -> Result<Self::Output, ConfigError>;

    /// Runs the validator, recording a failure on the property.
    ///
    /// No property, or a property without a raw value, yields `None` and
    /// leaves everything untouched.
    fn check(&self, property: Option<&mut Property>) -> Option<Self::Output> {
        let property = property?;
        if property.is_missing() {
            return None;
        }
        match self.validate(property) {
            Ok(value) => Some(value),
            Err(err) => {
                property.set_invalid(err.to_string());
                None
            }
        }
    }
}

impl<F, T> Validator for F
where
    F: Fn(&mut Property) -> Result<T, ConfigError>,
{
    type Output = T;

    fn validate(&self, property: &mut Property) -> Result<T, ConfigError> {
        self(property)
    }
}

/// The raw value, empty when absent.
fn raw(property: &Property) -> &str {
    property.value().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_validator() {
        let upper_only = |p: &mut Property| {
            let v = raw(p).to_string();
            if v.chars().all(|c| c.is_ascii_uppercase()) {
                Ok(v)
            } else {
                Err(ConfigError::invalid(format!("{} must be upper case", p.name())))
            }
        };
        let mut ok = Property::new("KEY", Some("ABC"));
        assert_eq!(upper_only.check(Some(&mut ok)).as_deref(), Some("ABC"));

        let mut bad = Property::new("KEY", Some("abc"));
        assert_eq!(upper_only.check(Some(&mut bad)), None);
        assert_eq!(bad.invalid_message(), Some("KEY must be upper case"));
    }

    #[test]
    fn test_no_property_yields_none() {
        assert_eq!(string().check(None), None);
        assert_eq!(boolean().check(None), None);
        assert_eq!(port().check(None), None);
    }

    #[test]
    fn test_property_without_value_is_untouched() {
        let mut prop = Property::new("KEY", None::<&str>);
        assert_eq!(boolean().check(Some(&mut prop)), None);
        assert_eq!(prop.invalid_message(), None);
    }
}
