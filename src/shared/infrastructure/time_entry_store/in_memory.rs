// In memory implementation of the TimeEntryStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep entries in insertion order, which is the store's natural order.
// - Evaluate filters, orderings and sums the way the relational store does.

use std::collections::HashSet;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    CounterpartySum, DistinctOrder, EntryField, EntryFilter, EntryOrder, StoreError,
    TimeEntryStore, cmp_nulls_last,
};
use crate::modules::time_entries::core::entry::{TimeEntry, TimeEntryDraft};

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    entries: RwLock<Vec<TimeEntry>>,
    is_offline: bool,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Time entry store offline".into()));
        }
        Ok(())
    }

    async fn matching(&self, filter: &EntryFilter) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }
}

fn seconds_of(entry: &TimeEntry) -> i64 {
    entry
        .end_time
        .signed_duration_since(entry.start_time)
        .num_seconds()
}

#[async_trait::async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn insert(&self, draft: TimeEntryDraft) -> Result<String, StoreError> {
        self.ensure_online()?;
        let id = Uuid::now_v7().to_string();
        self.entries.write().await.push(draft.into_entry(id.clone()));
        Ok(id)
    }

    async fn update(&self, id: &str, draft: TimeEntryDraft) -> Result<u64, StoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        match guard.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                *entry = draft.into_entry(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        let before = guard.len();
        guard.retain(|entry| entry.id != id);
        Ok((before - guard.len()) as u64)
    }

    async fn list_all(&self) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        let mut items = self.entries.read().await.clone();
        items.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(items)
    }

    async fn list_distinct(
        &self,
        field: EntryField,
        filter: &EntryFilter,
        order: DistinctOrder,
    ) -> Result<Vec<String>, StoreError> {
        let mut seen = HashSet::new();
        let mut values: Vec<String> = self
            .matching(filter)
            .await?
            .iter()
            .map(|entry| field.value_of(entry).to_string())
            .filter(|value| seen.insert(value.clone()))
            .collect();
        if order == DistinctOrder::Ascending {
            values.sort();
        }
        Ok(values)
    }

    async fn sum_duration(&self, filter: &EntryFilter) -> Result<Option<i64>, StoreError> {
        let items = self.matching(filter).await?;
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(items.iter().map(seconds_of).sum()))
    }

    async fn sum_duration_by_counterparty(
        &self,
        filter: &EntryFilter,
    ) -> Result<Vec<CounterpartySum>, StoreError> {
        let mut sums: Vec<CounterpartySum> = Vec::new();
        for entry in self.matching(filter).await? {
            let seconds = seconds_of(&entry);
            match sums
                .iter_mut()
                .find(|sum| sum.project == entry.project && sum.counterparty == entry.counterparty)
            {
                Some(sum) => sum.seconds += seconds,
                None => sums.push(CounterpartySum {
                    project: entry.project,
                    counterparty: entry.counterparty,
                    seconds,
                }),
            }
        }
        sums.sort_by(|a, b| {
            a.project
                .cmp(&b.project)
                .then_with(|| cmp_nulls_last(&a.counterparty, &b.counterparty))
        });
        Ok(sums)
    }

    async fn list_by_filter(
        &self,
        filter: &EntryFilter,
        order: EntryOrder,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        let mut items = self.matching(filter).await?;
        match order {
            EntryOrder::StartTimeAsc => items.sort_by_key(|entry| entry.start_time),
            EntryOrder::StartTimeDesc => items.sort_by(|a, b| b.start_time.cmp(&a.start_time)),
            EntryOrder::CounterpartyThenStartTime => items.sort_by(|a, b| {
                cmp_nulls_last(&a.counterparty, &b.counterparty)
                    .then_with(|| a.start_time.cmp(&b.start_time))
            }),
        }
        Ok(items)
    }
}
