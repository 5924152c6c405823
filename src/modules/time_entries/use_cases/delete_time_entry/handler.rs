use std::sync::Arc;

use tracing::{error, info};

use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

pub struct DeleteTimeEntryHandler {
    store: Arc<dyn TimeEntryStore>,
}

impl DeleteTimeEntryHandler {
    pub fn new(store: Arc<dyn TimeEntryStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: &str) -> Result<u64, ApplicationError> {
        let changes = self
            .store
            .delete(id)
            .await
            .inspect_err(|e| error!(error = %e, id, "time entry delete failed"))?;
        if changes == 0 {
            return Err(ApplicationError::NotFound);
        }
        info!(id, "time entry deleted");
        Ok(changes)
    }
}
