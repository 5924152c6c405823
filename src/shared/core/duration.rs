// Elapsed-time arithmetic shared by entry views and report totals.
//
// Purpose
// - Turn a start/end pair into elapsed seconds.
// - Render totals as `H:MM` and as decimal hours with two places, ties rounded up.
//
// Boundaries
// - Negative elapsed time is a data-quality error. It is surfaced, never clamped.
// - An empty group (no rows summed) is a zero total. See `DurationTotal::from_sum`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("negative elapsed time: {seconds}s")]
    NegativeInterval { seconds: i64 },
}

pub fn elapsed_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<i64, DurationError> {
    let seconds = end.signed_duration_since(start).num_seconds();
    if seconds < 0 {
        return Err(DurationError::NegativeInterval { seconds });
    }
    Ok(seconds)
}

/// Hours are unbounded, minutes are zero-padded: `90061` -> `"25:01"`.
pub fn format_hours_minutes(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{hours}:{minutes:02}")
}

/// Clock rendering used on single entries, hours padded to two digits.
pub fn format_clock(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}

/// Integer rounding in hundredths of an hour, half up: `450` -> `"0.13"`.
pub fn format_decimal_hours(total_seconds: i64) -> String {
    let hundredths = (total_seconds * 100 + 1800) / 3600;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DurationTotal {
    seconds: i64,
}

impl DurationTotal {
    pub fn new(seconds: i64) -> Result<Self, DurationError> {
        if seconds < 0 {
            return Err(DurationError::NegativeInterval { seconds });
        }
        Ok(Self { seconds })
    }

    /// Folds the outcome of a store sum into a total.
    ///
    /// `None` means no row matched the filter and yields a zero total.
    pub fn from_sum(sum: Option<i64>) -> Result<Self, DurationError> {
        match sum {
            None => Ok(Self::default()),
            Some(seconds) => Self::new(seconds),
        }
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn hours_minutes(&self) -> String {
        format_hours_minutes(self.seconds)
    }

    pub fn decimal_hours(&self) -> String {
        format_decimal_hours(self.seconds)
    }
}
