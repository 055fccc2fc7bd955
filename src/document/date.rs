use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::DocumentError;

/// Used when a document does not give a date.
pub const DEFAULT_DATE: &str = "1970-01-01";

// chrono accepts unpadded fields and signed years, so the layout is checked
// before any value reaches it.
static ISO_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}",
        r"([Tt ][0-9]{2}:[0-9]{2}(:[0-9]{2}(\.[0-9]+)?)?",
        r"([Zz]|[+-][0-9]{2}:?[0-9]{2})?)?$",
    ))
    .expect("Invalid ISO date regex")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 calendar date or date-time.
///
/// Accepts `YYYY-MM-DD`, and `YYYY-MM-DD` followed by `T` or a space and
/// `HH:MM[:SS[.fraction]]`, optionally ending in `Z` or a `+HH:MM` offset.
/// Values with an offset are converted to UTC; values without one are taken
/// as UTC.
pub fn parse_date(value: &str, file: &str) -> Result<DateTime<Utc>, DocumentError> {
    parse_iso(value.trim()).ok_or_else(|| DocumentError::InvalidDate {
        value: value.to_string(),
        file: file.to_string(),
    })
}

fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    if !ISO_SHAPE.is_match(value) {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    let normalized = normalize_separators(value)?;

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(&normalized, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(Utc.from_utc_datetime(&parsed));
        }
    }

    None
}

// Rewrites "YYYY-MM-DD HH:MM" to "YYYY-MM-DDTHH:MM" and a trailing "Z" to
// "+00:00" so one set of formats covers every accepted spelling.
fn normalize_separators(value: &str) -> Option<String> {
    let date = value.get(..10)?;
    let rest = value.get(10..)?;
    let time = rest
        .strip_prefix('T')
        .or_else(|| rest.strip_prefix('t'))
        .or_else(|| rest.strip_prefix(' '))?;

    let time = match time.strip_suffix('Z').or_else(|| time.strip_suffix('z')) {
        Some(local) => format!("{local}+00:00"),
        None => time.to_string(),
    };

    Some(format!("{date}T{time}"))
}
