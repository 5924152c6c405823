// Shared test fixture for time entry drafts.
// Defaults come from `json/time_entry_draft.json`; setters override single fields.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::time_entries::core::entry::TimeEntryDraft;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntryDraftDto {
    pub pid: String,
    pub client: String,
    pub department: String,
    pub project: String,
    pub counterparty: Option<String>,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
}

pub fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("fixture timestamps are RFC 3339")
        .with_timezone(&Utc)
}

pub struct TimeEntryDraftBuilder {
    inner: TimeEntryDraft,
}

impl Default for TimeEntryDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryDraftBuilder {
    pub fn new() -> Self {
        let dto: TimeEntryDraftDto =
            serde_json::from_str(include_str!("json/time_entry_draft.json")).unwrap();

        Self {
            inner: TimeEntryDraft {
                pid: dto.pid,
                client: dto.client,
                department: dto.department,
                project: dto.project,
                counterparty: dto.counterparty,
                description: dto.description,
                start_time: instant(&dto.start_time),
                end_time: instant(&dto.end_time),
            },
        }
    }

    pub fn pid(mut self, v: impl Into<String>) -> Self {
        self.inner.pid = v.into();
        self
    }

    pub fn client(mut self, v: impl Into<String>) -> Self {
        self.inner.client = v.into();
        self
    }

    pub fn department(mut self, v: impl Into<String>) -> Self {
        self.inner.department = v.into();
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = v.into();
        self
    }

    pub fn counterparty(mut self, v: impl Into<String>) -> Self {
        self.inner.counterparty = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn between(mut self, start: &str, end: &str) -> Self {
        self.inner.start_time = instant(start);
        self.inner.end_time = instant(end);
        self
    }

    pub fn build(self) -> TimeEntryDraft {
        self.inner
    }

    pub async fn insert_into(self, store: &dyn TimeEntryStore) -> String {
        store.insert(self.build()).await.expect("fixture insert failed")
    }
}

#[cfg(test)]
mod time_entry_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = TimeEntryDraftBuilder::default().build();
        assert_eq!(built.pid, "P-100");
        assert_eq!(built.client, "ACME");
        assert_eq!(built.department, "Legal");
        assert_eq!(built.project, "P1");
        assert_eq!(built.counterparty, None);
        assert_eq!(built.description.as_deref(), Some("Contract review"));
        assert_eq!(built.start_time, instant("2024-03-01T09:00:00Z"));
        assert_eq!(built.end_time, instant("2024-03-01T10:30:00Z"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = TimeEntryDraftBuilder::new()
            .pid("P-1")
            .client("GLOBEX")
            .department("Tax")
            .project("EFET")
            .counterparty("Initech")
            .description("desc")
            .between("2024-01-01T08:00:00Z", "2024-01-01T09:00:00Z")
            .build();

        assert_eq!(custom.pid, "P-1");
        assert_eq!(custom.client, "GLOBEX");
        assert_eq!(custom.department, "Tax");
        assert_eq!(custom.project, "EFET");
        assert_eq!(custom.counterparty.as_deref(), Some("Initech"));
        assert_eq!(custom.description.as_deref(), Some("desc"));
        assert_eq!(custom.start_time, instant("2024-01-01T08:00:00Z"));
    }
}
