// Port for the relational time entry store.
//
// Purpose
// - Describe the queries the reporting core issues, without binding to a database.
//
// Filter semantics
// - Client equality, optional department / project / counterparty equality.
// - Window: `start_time >= window.start AND end_time <= window.end`. An entry straddling
//   either bound is excluded.
//
// Ordering
// - Text orderings are ascending with absent values last.

pub mod in_memory;

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::modules::time_entries::core::entry::{TimeEntry, TimeEntryDraft};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, entry: &TimeEntry) -> bool {
        entry.start_time >= self.start && entry.end_time <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFilter {
    pub client: String,
    pub department: Option<String>,
    pub project: Option<String>,
    pub counterparty: Option<String>,
    pub window: Option<TimeWindow>,
}

impl EntryFilter {
    pub fn client(client: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            department: None,
            project: None,
            counterparty: None,
            window: None,
        }
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    pub fn within(mut self, window: TimeWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn matches(&self, entry: &TimeEntry) -> bool {
        fn eq_if_set(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().is_none_or(|expected| expected == actual)
        }

        entry.client == self.client
            && eq_if_set(&self.department, &entry.department)
            && eq_if_set(&self.project, &entry.project)
            && self
                .counterparty
                .as_deref()
                .is_none_or(|expected| entry.counterparty.as_deref() == Some(expected))
            && self.window.is_none_or(|window| window.contains(entry))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Department,
    Project,
}

impl EntryField {
    pub fn value_of<'a>(&self, entry: &'a TimeEntry) -> &'a str {
        match self {
            EntryField::Department => &entry.department,
            EntryField::Project => &entry.project,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctOrder {
    /// Order in which the store first encounters each value.
    FirstSeen,
    Ascending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrder {
    StartTimeAsc,
    StartTimeDesc,
    CounterpartyThenStartTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterpartySum {
    pub project: String,
    pub counterparty: Option<String>,
    pub seconds: i64,
}

pub fn cmp_nulls_last(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
pub trait TimeEntryStore: Send + Sync {
    /// Persists a new entry and returns its assigned identifier.
    async fn insert(&self, draft: TimeEntryDraft) -> Result<String, StoreError>;

    /// Replaces every field of an entry. Returns the number of affected rows.
    async fn update(&self, id: &str, draft: TimeEntryDraft) -> Result<u64, StoreError>;

    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    /// All entries, latest start first.
    async fn list_all(&self) -> Result<Vec<TimeEntry>, StoreError>;

    async fn list_distinct(
        &self,
        field: EntryField,
        filter: &EntryFilter,
        order: DistinctOrder,
    ) -> Result<Vec<String>, StoreError>;

    /// Elapsed seconds over the matching entries, `None` when nothing matches.
    async fn sum_duration(&self, filter: &EntryFilter) -> Result<Option<i64>, StoreError>;

    /// Elapsed seconds grouped by (project, counterparty), ordered by both.
    async fn sum_duration_by_counterparty(
        &self,
        filter: &EntryFilter,
    ) -> Result<Vec<CounterpartySum>, StoreError>;

    async fn list_by_filter(
        &self,
        filter: &EntryFilter,
        order: EntryOrder,
    ) -> Result<Vec<TimeEntry>, StoreError>;
}
