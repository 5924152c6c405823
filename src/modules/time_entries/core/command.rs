// Raw time entry input and its validation into a draft.
//
// Responsibilities
// - Require pid, client, department and project.
// - Interpret start and end as local wall-clock time in the source zone.
// - Enforce that the end lies after the start.
// - Never perform input or output.

use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

use crate::modules::time_entries::core::entry::TimeEntryDraft;
use crate::shared::core::wall_clock::{WallClockError, local_to_utc};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Timestamp(#[from] WallClockError),

    #[error("end time must be after start time")]
    InvalidInterval,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimeEntryInput {
    #[serde(default)]
    pub pid: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub project: String,
    pub counterparty: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TimeEntryInput {
    pub fn validate(self, source_zone: Tz) -> Result<TimeEntryDraft, ValidationError> {
        let pid = required(self.pid, "pid")?;
        let client = required(self.client, "client")?;
        let department = required(self.department, "department")?;
        let project = required(self.project, "project")?;
        let start_time = local_to_utc(&required(self.start_time, "start_time")?, source_zone)?;
        let end_time = local_to_utc(&required(self.end_time, "end_time")?, source_zone)?;
        if end_time <= start_time {
            return Err(ValidationError::InvalidInterval);
        }
        Ok(TimeEntryDraft {
            pid,
            client,
            department,
            project,
            counterparty: optional(self.counterparty),
            description: optional(self.description),
            start_time,
            end_time,
        })
    }
}
