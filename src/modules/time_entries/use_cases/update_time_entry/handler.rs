use std::sync::Arc;

use chrono_tz::Tz;
use tracing::{error, info};

use crate::modules::time_entries::core::command::TimeEntryInput;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

pub struct UpdateTimeEntryHandler {
    store: Arc<dyn TimeEntryStore>,
    source_zone: Tz,
}

impl UpdateTimeEntryHandler {
    pub fn new(store: Arc<dyn TimeEntryStore>, source_zone: Tz) -> Self {
        Self { store, source_zone }
    }

    /// Replaces the whole record. Returns the affected row count, never zero.
    pub async fn handle(&self, id: &str, input: TimeEntryInput) -> Result<u64, ApplicationError> {
        let draft = input.validate(self.source_zone)?;
        let changes = self
            .store
            .update(id, draft)
            .await
            .inspect_err(|e| error!(error = %e, id, "time entry update failed"))?;
        if changes == 0 {
            return Err(ApplicationError::NotFound);
        }
        info!(id, "time entry updated");
        Ok(changes)
    }
}
