//! Calendar-date boundary transforms.
//!
//! The form layer works with plain `YYYY-MM-DD` strings, the wire carries
//! ISO-8601 timestamps. Both directions are plain string work so the same
//! code runs on wasm and native targets.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected a YYYY-MM-DD calendar date, got `{0}`")]
    InvalidCalendarDate(String),
    #[error("expected an ISO-8601 timestamp, got `{0}`")]
    InvalidTimestamp(String),
}

/// `2025-01-15` -> `2025-01-15T00:00:00.000Z` (midnight UTC).
pub fn date_to_wire(date: &str) -> Result<String, DateError> {
    if !is_calendar_date(date) {
        return Err(DateError::InvalidCalendarDate(date.to_string()));
    }
    Ok(format!("{date}T00:00:00.000Z"))
}

/// `2025-01-15T09:30:00.000Z` -> `2025-01-15`.
///
/// Bare `YYYY-MM-DD` input is accepted unchanged so re-loading an already
/// converted record is harmless.
pub fn date_from_wire(timestamp: &str) -> Result<String, DateError> {
    let day = timestamp.get(..10).unwrap_or(timestamp);
    let separator_ok = match timestamp.as_bytes().get(10) {
        None => true,
        Some(b'T') | Some(b' ') => true,
        Some(_) => false,
    };
    if !separator_ok || !is_calendar_date(day) {
        return Err(DateError::InvalidTimestamp(timestamp.to_string()));
    }
    Ok(day.to_string())
}

fn is_calendar_date(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return false;
    }
    let digits = [0usize, 1, 2, 3, 5, 6, 8, 9];
    if !digits.iter().all(|&i| b[i].is_ascii_digit()) {
        return false;
    }
    let month = (b[5] - b'0') * 10 + (b[6] - b'0');
    let day = (b[8] - b'0') * 10 + (b[9] - b'0');
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_date_round_trips_through_the_wire() {
        for d in ["2025-01-15", "1999-12-31", "2026-02-01"] {
            let wire = date_to_wire(d).expect("to wire");
            assert_eq!(date_from_wire(&wire).expect("from wire"), d);
        }
    }

    #[test]
    fn to_wire_produces_midnight_utc() {
        assert_eq!(date_to_wire("2025-01-15").expect("to wire"), "2025-01-15T00:00:00.000Z");
    }

    #[test]
    fn from_wire_accepts_bare_calendar_date() {
        assert_eq!(date_from_wire("2025-01-15").expect("bare date"), "2025-01-15");
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(date_to_wire("15/01/2025").is_err());
        assert!(date_to_wire("2025-13-01").is_err());
        assert!(date_to_wire("2025-01-32").is_err());
        assert!(date_to_wire("").is_err());
        assert!(date_from_wire("not a timestamp").is_err());
        assert!(date_from_wire("2025-01-15X00:00").is_err());
    }
}
