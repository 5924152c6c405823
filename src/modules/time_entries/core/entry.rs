// Time entry records and their read view.
//
// Purpose
// - `TimeEntry` is what the store keeps: one logged work interval in UTC.
// - `TimeEntryDraft` is a validated record without an identifier, used for insert and full update.
// - `TimeEntryView` is what callers see: client resolved to its label, elapsed time pre-rendered.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::core::client_labels::ClientLabels;
use crate::shared::core::duration::{DurationError, elapsed_seconds, format_clock, format_decimal_hours};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: String,
    pub pid: String,
    pub client: String,
    pub department: String,
    pub project: String,
    pub counterparty: Option<String>,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryDraft {
    pub pid: String,
    pub client: String,
    pub department: String,
    pub project: String,
    pub counterparty: Option<String>,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TimeEntryDraft {
    pub fn into_entry(self, id: impl Into<String>) -> TimeEntry {
        TimeEntry {
            id: id.into(),
            pid: self.pid,
            client: self.client,
            department: self.department,
            project: self.project,
            counterparty: self.counterparty,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntryView {
    pub id: String,
    pub pid: String,
    pub client: String,
    pub department: String,
    pub project: String,
    pub counterparty: Option<String>,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub time_diff_hrs_mins: String,
    pub time_diff_decimal: String,
}

impl TimeEntryView {
    pub fn from_entry(entry: TimeEntry, labels: &ClientLabels) -> Result<Self, DurationError> {
        let seconds = elapsed_seconds(entry.start_time, entry.end_time)?;
        Ok(Self {
            client: labels.resolve(&entry.client).to_string(),
            id: entry.id,
            pid: entry.pid,
            department: entry.department,
            project: entry.project,
            counterparty: entry.counterparty,
            description: entry.description,
            start_time: entry.start_time,
            end_time: entry.end_time,
            time_diff_hrs_mins: format_clock(seconds),
            time_diff_decimal: format_decimal_hours(seconds),
        })
    }
}
