//! Release-cycle time helpers.
//!
//! Weekly release directories and exchange-status records are labelled
//! with "week signatures" (`2018_21`) and RFC 3339 timestamps with a
//! space separator and microsecond precision.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("timestamp {text:?} is not parsable")]
    Invalid { text: String },

    #[error("timestamp {text:?} lacks a UTC offset")]
    MissingOffset { text: String },
}

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

/// Current UTC time as `2025-02-03 18:37:14.108402+00:00`.
///
/// The offset is always numeric (`+00:00`, never `Z`).
pub fn timestamp_utc() -> String {
    Utc::now().format(STAMP_FORMAT).to_string()
}

/// Current local time in the same format as [`timestamp_utc`].
pub fn timestamp_local() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}

/// Week signature `%Y_%V` for the given date, or `None` for an invalid
/// date.
///
/// `%Y` is the calendar year while `%V` is the ISO week number, so the
/// first days of January can report the final week of the previous ISO
/// year (2021-01-01 is `2021_53`). Release directories on disk use
/// exactly this labelling.
pub fn week_signature(year: i32, month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.format("%Y_%V").to_string())
}

/// Week signature for today (local time).
pub fn current_week_signature() -> String {
    Local::now().format("%Y_%V").to_string()
}

/// Parses an RFC 3339 timestamp, accepting either `T` or a space as
/// the date/time separator. Timestamps without a UTC offset are
/// rejected.
pub fn parse_timestamp(ts: &str) -> Result<DateTime<FixedOffset>, ScheduleError> {
    let normalized = ts.trim().replacen(' ', "T", 1);
    match DateTime::parse_from_rfc3339(&normalized) {
        Ok(dt) => Ok(dt),
        Err(_) if normalized.parse::<NaiveDateTime>().is_ok() => {
            Err(ScheduleError::MissingOffset {
                text: ts.to_string(),
            })
        }
        Err(_) => Err(ScheduleError::Invalid {
            text: ts.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp_utc();
        // 2025-02-03 18:37:14.108402+00:00
        assert_eq!(ts.len(), 32);
        assert_eq!(&ts[10..11], " ");
        assert!(ts.ends_with("+00:00"));
        assert!(!ts.contains('Z'));
    }

    #[test]
    fn test_week_signature() {
        assert_eq!(week_signature(2018, 5, 21).as_deref(), Some("2018_21"));
        // Calendar year with previous ISO year's week number
        assert_eq!(week_signature(2021, 1, 1).as_deref(), Some("2021_53"));
        assert_eq!(week_signature(2021, 2, 30), None);
    }

    #[test]
    fn test_parse_round_trip() {
        let dt = parse_timestamp("2025-02-03 11:37:14.108402-07:00").unwrap();
        assert_eq!(dt.format(STAMP_FORMAT).to_string(), "2025-02-03 11:37:14.108402-07:00");

        // 'T' separator is accepted too
        let dt = parse_timestamp("2025-02-03T11:37:14.108402+00:00").unwrap();
        assert_eq!(dt.timezone(), FixedOffset::east_opt(0).unwrap());
    }

    #[test]
    fn test_parse_rejects_missing_offset() {
        assert_eq!(
            parse_timestamp("2025-02-03 11:37:14"),
            Err(ScheduleError::MissingOffset {
                text: "2025-02-03 11:37:14".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("not a timestamp"),
            Err(ScheduleError::Invalid { .. })
        ));
    }
}
