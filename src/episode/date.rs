use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::error::LoadError;

/// Abbreviated month names for the pt-BR locale
const PT_BR_MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Offset forms; `%#z` takes `Z`, `+03`, `+0300` and `+03:00`
const OFFSET_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 `published_at` value into the calendar date it names.
///
/// Timestamps carrying an offset keep the date as written in that offset.
pub fn parse_published_at(date_str: &str) -> Result<NaiveDate, LoadError> {
    let trimmed = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date_naive());
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| LoadError::InvalidDate {
        date_str: date_str.to_string(),
        reason: e.to_string(),
    })
}

/// Format a date as `d MMM yy` with pt-BR month names, e.g. `3 mai 21`
pub fn format_published_at(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        PT_BR_MONTHS[date.month0() as usize],
        date.format("%y")
    )
}
