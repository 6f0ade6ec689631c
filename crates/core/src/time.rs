//! Instants and the day-month-year text layouts accepted for them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::error::{Result, TimeParseError};

/// Timestamp type
pub type Time = DateTime<Utc>;

/// Date-only layout, e.g. `25-12-2025`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Date and time layout, e.g. `25-12-2025 18:30`.
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// A date supplied by a caller, either already parsed or as text.
///
/// Naive values and text carry no zone and are read as UTC.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Already an instant
    Instant(Time),
    /// Wall-clock value without a zone
    Naive(NaiveDateTime),
    /// Text in [`DATE_TIME_FORMAT`] or [`DATE_FORMAT`]
    Text(String),
}

impl DateInput {
    /// Resolve into an instant.
    pub fn resolve(self) -> Result<Time> {
        match self {
            Self::Instant(at) => Ok(at),
            Self::Naive(naive) => Ok(naive.and_utc()),
            Self::Text(text) => parse_instant(&text),
        }
    }

    /// Resolve into an instant, logging and discarding bad input.
    pub(crate) fn resolve_or_warn(self, field: &str) -> Option<Time> {
        match self.resolve() {
            Ok(at) => Some(at),
            Err(err) => {
                warn!("Discarding {}: {}", field, err);
                None
            }
        }
    }
}

impl From<Time> for DateInput {
    fn from(at: Time) -> Self {
        Self::Instant(at)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Parse `dd-mm-YYYY HH:MM` or `dd-mm-YYYY` (midnight) as a UTC instant.
pub fn parse_instant(text: &str) -> Result<Time> {
    let trimmed = text.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT) {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            TimeParseError::Invalid {
                input: text.to_string(),
            }
            .into()
        })
}

/// Render an instant as `dd-mm-YYYY`.
pub fn format_date(at: &Time) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Render an instant as `dd-mm-YYYY HH:MM`.
pub fn format_date_time(at: &Time) -> String {
    at.format(DATE_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_parse_date_time() {
        let at = parse_instant("01-01-2025 12:30").unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2025, 1, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let at = parse_instant("25-12-2024").unwrap();
        assert_eq!(at.hour(), 0);
        assert_eq!(format_date(&at), "25-12-2024");
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        for input in ["2025-01-01", "31-02-2025", "tomorrow", ""] {
            let err = parse_instant(input).unwrap_err();
            assert!(matches!(err, CoreError::Time(TimeParseError::Invalid { .. })));
        }
    }

    #[test]
    fn test_resolve_inputs() {
        let at = Utc.with_ymd_and_hms(2030, 6, 1, 8, 0, 0).unwrap();
        assert_eq!(DateInput::from(at).resolve().unwrap(), at);
        assert_eq!(DateInput::from(at.naive_utc()).resolve().unwrap(), at);
        assert_eq!(DateInput::from("01-06-2030 08:00").resolve().unwrap(), at);
        assert_eq!(DateInput::from("garbage").resolve_or_warn("deadline"), None);
    }

    #[test]
    fn test_format_date_time() {
        let at = Utc.with_ymd_and_hms(2099, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(format_date_time(&at), "01-01-2099 12:00");
    }
}
