use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::{raw, Validator};
use crate::config::{ConfigError, Property};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    // Month names, full or abbreviated: "May 23, 2021", "23 Jan 2021"
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Calendar date or timestamp, converted to UTC.
///
/// Date-only values land on midnight UTC; timestamps without an offset are
/// taken as UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateValidator;

pub fn date() -> DateValidator {
    DateValidator
}

impl Validator for DateValidator {
    type Output = DateTime<Utc>;

    fn validate(&self, property: &mut Property) -> Result<DateTime<Utc>, ConfigError> {
        let value = raw(property).trim();
        parse_date(value).ok_or_else(|| {
            ConfigError::invalid(format!(
                "{} contains invalid date ({}).",
                property.name(),
                raw(property)
            ))
        })
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt.and_utc());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, SubsecRound, Timelike};

    fn run(value: &str) -> (Option<DateTime<Utc>>, Option<String>) {
        let mut p = Property::new("testdummy", Some(value));
        let out = date().check(Some(&mut p));
        (out, p.invalid_message().map(str::to_string))
    }

    #[test]
    fn test_rfc3339_round_trip() {
        let now = Utc::now().trunc_subsecs(3);
        let text = now.to_rfc3339();
        assert_eq!(run(&text).0, Some(now));
    }

    #[test]
    fn test_us_date() {
        let parsed = run("5/23/2021").0.unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2021, 5, 23));
    }

    #[test]
    fn test_iso_date() {
        let parsed = run("2021-05-23").0.unwrap();
        assert_eq!(parsed.to_rfc3339(), "2021-05-23T00:00:00+00:00");
    }

    #[test]
    fn test_minute_precision_timestamps() {
        for text in ["2021-05-23T10:00", "2021-05-23 10:00"] {
            let parsed = run(text).0.unwrap();
            assert_eq!(parsed.to_rfc3339(), "2021-05-23T10:00:00+00:00", "{text}");
        }
    }

    #[test]
    fn test_month_name_dates() {
        for text in ["May 23, 2021", "May 23 2021", "23 May 2021", "Jan 5, 2021"] {
            let parsed = run(text).0.unwrap();
            assert_eq!(parsed.hour(), 0, "{text}");
            assert!(matches!((parsed.month(), parsed.day()), (5, 23) | (1, 5)), "{text}");
            assert_eq!(parsed.year(), 2021, "{text}");
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(run("dd-MMM-yyy").0, None);
        assert_eq!(run("").0, None);

        let (out, msg) = run("32.01.2021");
        assert_eq!(out, None);
        assert_eq!(msg.as_deref(), Some("testdummy contains invalid date (32.01.2021)."));
    }
}
