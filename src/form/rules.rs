//! Field-level validation rules.

use super::value::FieldValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::*;
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single check applied to a field value. Each variant carries the message
/// reported when the check fails.
///
/// Format checks pass on empty input so that only `Required` reports a
/// missing value. Whitespace counts as input.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    PositiveNumber(&'static str),
    Numeric {
        min_len: usize,
        message: &'static str,
    },
    Url(&'static str),
    DateTime(&'static str),
    OneOf(&'static [&'static str], &'static str),
    AnyChecked(&'static str),
}

impl Rule {
    /// Check a value, returning the failure message if it does not pass.
    ///
    pub fn check(&self, value: Option<&FieldValue>) -> Result<(), &'static str> {
        let text = value.and_then(FieldValue::as_text).unwrap_or("");
        let passed = match self {
            Rule::Required(_) => value.map(|v| !v.is_blank()).unwrap_or(false),
            Rule::AnyChecked(_) => matches!(value, Some(FieldValue::Group(g)) if g.values().any(|c| *c)),
            _ if text.is_empty() => true,
            Rule::Email(_) => is_email(text),
            Rule::PositiveNumber(_) => is_positive_number(text),
            Rule::Numeric { min_len, .. } => text.chars().count() >= *min_len && is_number(text),
            Rule::Url(_) => is_url(text),
            Rule::DateTime(_) => is_date_time(text),
            Rule::OneOf(options, _) => options.iter().any(|o| *o == text),
        };
        if passed {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::Required(m)
            | Rule::Email(m)
            | Rule::PositiveNumber(m)
            | Rule::Url(m)
            | Rule::DateTime(m)
            | Rule::OneOf(_, m)
            | Rule::AnyChecked(m) => m,
            Rule::Numeric { message, .. } => message,
        }
    }
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Failed to compile regex pattern '{}': {}", EMAIL_PATTERN, e);
                None
            }
        })
        .as_ref()
}

/// Return true for `local@domain.tld`-shaped input.
///
pub fn is_email(text: &str) -> bool {
    email_regex().map(|re| re.is_match(text)).unwrap_or(false)
}

/// Return true for anything that reads as a number once surrounding
/// whitespace is dropped, signs and exponents included.
///
pub fn is_number(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .map(|n| !n.is_nan())
        .unwrap_or(false)
}

/// Return true for a finite decimal strictly greater than zero.
///
pub fn is_positive_number(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}

/// Return true for an absolute, well-formed URL.
///
pub fn is_url(text: &str) -> bool {
    url::Url::parse(text).is_ok()
}

/// Return true for a local date-time as produced by a date-time picker, a
/// bare calendar date, or an RFC 3339 timestamp.
///
pub fn is_date_time(text: &str) -> bool {
    let text = text.trim();
    DATE_TIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(text, fmt).is_ok())
        || NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok()
        || DateTime::parse_from_rfc3339(text).is_ok()
}
