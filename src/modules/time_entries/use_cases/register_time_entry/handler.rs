use std::sync::Arc;

use chrono_tz::Tz;
use tracing::{error, info};

use crate::modules::time_entries::core::command::TimeEntryInput;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

pub struct RegisterTimeEntryHandler {
    store: Arc<dyn TimeEntryStore>,
    source_zone: Tz,
}

impl RegisterTimeEntryHandler {
    pub fn new(store: Arc<dyn TimeEntryStore>, source_zone: Tz) -> Self {
        Self { store, source_zone }
    }

    pub async fn handle(&self, input: TimeEntryInput) -> Result<String, ApplicationError> {
        let draft = input.validate(self.source_zone)?;
        let id = self
            .store
            .insert(draft)
            .await
            .inspect_err(|e| error!(error = %e, "time entry insert failed"))?;
        info!(id = %id, "time entry registered");
        Ok(id)
    }
}

#[cfg(test)]
mod register_time_entry_handler_tests {
    use super::*;
    use crate::modules::time_entries::core::command::ValidationError;
    use crate::shared::infrastructure::time_entry_store::in_memory::InMemoryTimeEntryStore;
    use crate::shared::infrastructure::time_entry_store::{EntryFilter, StoreError};
    use chrono_tz::Europe::Berlin;
    use rstest::{fixture, rstest};

    #[fixture]
    fn input() -> TimeEntryInput {
        TimeEntryInput {
            pid: "P-100".into(),
            client: "ACME".into(),
            department: "Legal".into(),
            project: "P1".into(),
            counterparty: None,
            description: None,
            start_time: "2024-03-05 10:00".into(),
            end_time: "2024-03-05 11:30".into(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_inserts_the_converted_entry(input: TimeEntryInput) {
        let store = Arc::new(InMemoryTimeEntryStore::new());
        let handler = RegisterTimeEntryHandler::new(store.clone(), Berlin);

        let id = handler.handle(input).await.expect("handle failed");

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].start_time.to_rfc3339(), "2024-03-05T09:00:00+00:00");
        assert_eq!(
            store.sum_duration(&EntryFilter::client("ACME")).await.unwrap(),
            Some(5400)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_fails_on_invalid_input(input: TimeEntryInput) {
        let handler = RegisterTimeEntryHandler::new(Arc::new(InMemoryTimeEntryStore::new()), Berlin);
        let input = TimeEntryInput {
            end_time: "2024-03-05 09:00".into(),
            ..input
        };

        let result = handler.handle(input).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Validation(ValidationError::InvalidInterval))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_fails_if_the_store_is_offline(input: TimeEntryInput) {
        let mut store = InMemoryTimeEntryStore::new();
        store.toggle_offline();
        let handler = RegisterTimeEntryHandler::new(Arc::new(store), Berlin);

        let result = handler.handle(input).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Store(StoreError::Backend(_)))
        ));
    }
}
