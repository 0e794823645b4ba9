use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use url::Url;

use super::{raw, Validator};
use crate::config::{ConfigError, Property};

/// Absolute URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlValidator;

pub fn url() -> UrlValidator {
    UrlValidator
}

impl Validator for UrlValidator {
    type Output = Url;

    fn validate(&self, property: &mut Property) -> Result<Url, ConfigError> {
        let value = raw(property);
        Url::parse(value).map_err(|err| {
            tracing::debug!(key = property.name(), error = %err, "url parse failed");
            ConfigError::invalid(format!(
                "{} invalid URL ({value}). Exception: Invalid URL",
                property.name()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4Validator;

pub fn ipv4() -> Ipv4Validator {
    Ipv4Validator
}

impl Validator for Ipv4Validator {
    type Output = Ipv4Addr;

    fn validate(&self, property: &mut Property) -> Result<Ipv4Addr, ConfigError> {
        raw(property)
            .parse()
            .map_err(|_| invalid_address(property, "IPv4"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv6Validator;

pub fn ipv6() -> Ipv6Validator {
    Ipv6Validator
}

impl Validator for Ipv6Validator {
    type Output = Ipv6Addr;

    fn validate(&self, property: &mut Property) -> Result<Ipv6Addr, ConfigError> {
        raw(property)
            .parse()
            .map_err(|_| invalid_address(property, "IPv6"))
    }
}

/// Either address family.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpValidator;

pub fn ip() -> IpValidator {
    IpValidator
}

impl Validator for IpValidator {
    type Output = IpAddr;

    fn validate(&self, property: &mut Property) -> Result<IpAddr, ConfigError> {
        raw(property)
            .parse()
            .map_err(|_| invalid_address(property, "IP"))
    }
}

fn invalid_address(property: &Property, family: &str) -> ConfigError {
    ConfigError::invalid(format!(
        "{} has to be a valid {family} address, currently is ({})",
        property.name(),
        raw(property)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<V: Validator>(validator: V, value: &str) -> (Option<V::Output>, Option<String>) {
        let mut p = Property::new("testdummy", Some(value));
        let out = validator.check(Some(&mut p));
        (out, p.invalid_message().map(str::to_string))
    }

    #[test]
    fn test_url() {
        let a = run(url(), "https://estos.de").0.unwrap();
        assert_eq!(a.as_str(), "https://estos.de/");
        let b = run(url(), "https://estos.de/").0.unwrap();
        assert_eq!(b.as_str(), "https://estos.de/");
        assert_eq!(run(url(), "https//estos.de").0, None);
        assert_eq!(run(url(), "").0, None);
    }

    #[test]
    fn test_url_message() {
        let (out, msg) = run(url(), "ttp/est....os.de");
        assert_eq!(out, None);
        assert_eq!(
            msg.as_deref(),
            Some("testdummy invalid URL (ttp/est....os.de). Exception: Invalid URL")
        );
    }

    #[test]
    fn test_ipv4() {
        assert_eq!(run(ipv4(), "1.2.3.4").0, Some(Ipv4Addr::new(1, 2, 3, 4)));
        assert_eq!(run(ipv4(), "255.255.255.255").0, Some(Ipv4Addr::BROADCAST));
        assert_eq!(run(ipv4(), "0.0.0.0").0, Some(Ipv4Addr::UNSPECIFIED));
        assert_eq!(run(ipv4(), "1.2.3").0, None);
        assert_eq!(run(ipv4(), "1.2.3.4.5").0, None);
        assert_eq!(run(ipv4(), "").0, None);

        let (out, msg) = run(ipv4(), "256.0.0.1");
        assert_eq!(out, None);
        assert_eq!(
            msg.as_deref(),
            Some("testdummy has to be a valid IPv4 address, currently is (256.0.0.1)")
        );
    }

    #[test]
    fn test_ipv6() {
        assert_eq!(run(ipv6(), "::1").0, Some(Ipv6Addr::LOCALHOST));
        assert!(run(ipv6(), "fe80::1").0.is_some());
        assert!(run(ipv6(), "2001:0db8:0000:0000:0000:ff00:0042:8329").0.is_some());
        assert_eq!(run(ipv6(), "A:B:C:D:E:F:G").0, None);
        assert_eq!(run(ipv6(), "256.0.0.1").0, None);
        assert_eq!(run(ipv6(), "").0, None);
    }

    #[test]
    fn test_ip() {
        assert_eq!(run(ip(), "::1").0, Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(run(ip(), "127.0.0.1").0, Some(IpAddr::V4(Ipv4Addr::LOCALHOST)));

        let (out, msg) = run(ip(), "");
        assert_eq!(out, None);
        assert_eq!(
            msg.as_deref(),
            Some("testdummy has to be a valid IP address, currently is ()")
        );
    }
}
