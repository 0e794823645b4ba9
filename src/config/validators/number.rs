use super::{raw, Validator};
use crate::config::{ConfigError, Property};

/// Largest integer exactly representable in an IEEE 754 double.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Base-10 integer within an inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct IntegerValidator {
    min: i64,
    max: i64,
}

pub fn integer() -> IntegerValidator {
    integer_in(MIN_SAFE_INTEGER, MAX_SAFE_INTEGER)
}

pub fn integer_in(min: i64, max: i64) -> IntegerValidator {
    IntegerValidator { min, max }
}

impl Validator for IntegerValidator {
    type Output = i64;

    fn validate(&self, property: &mut Property) -> Result<i64, ConfigError> {
        parse_in_range(property, self.min, self.max)
    }
}

/// TCP/UDP port in `[0, 65535]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortValidator;

pub fn port() -> PortValidator {
    PortValidator
}

impl Validator for PortValidator {
    type Output = u16;

    fn validate(&self, property: &mut Property) -> Result<u16, ConfigError> {
        let number = parse_in_range(property, 0, u16::MAX.into())?;
        u16::try_from(number).map_err(|_| out_of_range(property, 0, u16::MAX.into()))
    }
}

fn parse_in_range(property: &Property, min: i64, max: i64) -> Result<i64, ConfigError> {
    leading_integer(raw(property))
        .filter(|n| (min..=max).contains(n))
        .ok_or_else(|| out_of_range(property, min, max))
}

fn out_of_range(property: &Property, min: i64, max: i64) -> ConfigError {
    ConfigError::invalid(format!(
        "{} has to be within [{min}, {max}], currently is ({})",
        property.name(),
        raw(property)
    ))
}

/// Parses the leading integer of `s`: optional whitespace and sign, then
/// digits. Anything after the digits, such as a fraction, is ignored, so
/// fractional input truncates toward zero.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Overflow is reported as out of range by the caller
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
