// Conversions between wall-clock strings and absolute instants.
//
// Responsibilities
// - Entry input: local wall-clock strings are read in the source zone, RFC 3339 keeps its offset.
//   Sub-second fractions are truncated, so every stored entry spans whole seconds.
// - Report input: naive strings are read as UTC, the store's native representation.
// - Export output: instants rendered as `DD.MM.YYYY HH:mm:ss` in the display zone.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, SubsecRound, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WallClockError {
    #[error("unparseable timestamp: {0}")]
    Unparseable(String),

    #[error("local time {0} does not exist in {1}")]
    NonExistent(String, Tz),
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// Reads an entry timestamp. Ambiguous local times (DST fall-back) resolve to the earlier instant.
pub fn local_to_utc(input: &str, zone: Tz) -> Result<DateTime<Utc>, WallClockError> {
    let input = input.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc).trunc_subsecs(0));
    }
    let naive = parse_naive(input).ok_or_else(|| WallClockError::Unparseable(input.to_string()))?;
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(WallClockError::NonExistent(input.to_string(), zone)),
    }
}

pub fn parse_report_instant(input: &str) -> Result<DateTime<Utc>, WallClockError> {
    let input = input.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Some(naive) = parse_naive(input) {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| WallClockError::Unparseable(input.to_string()))
}

pub fn format_display(instant: DateTime<Utc>, zone: Tz) -> String {
    instant.with_timezone(&zone).format(DISPLAY_FORMAT).to_string()
}
