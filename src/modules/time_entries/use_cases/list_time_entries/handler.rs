use std::sync::Arc;

use tracing::error;

use crate::modules::reporting::core::assembler::ReportAssembler;
use crate::modules::time_entries::core::entry::TimeEntryView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

pub struct ListTimeEntriesHandler {
    store: Arc<dyn TimeEntryStore>,
    assembler: Arc<ReportAssembler>,
}

impl ListTimeEntriesHandler {
    pub fn new(store: Arc<dyn TimeEntryStore>, assembler: Arc<ReportAssembler>) -> Self {
        Self { store, assembler }
    }

    /// Every entry, latest start first, with client labels resolved.
    pub async fn handle(&self) -> Result<Vec<TimeEntryView>, ApplicationError> {
        let entries = self
            .store
            .list_all()
            .await
            .inspect_err(|e| error!(error = %e, "time entry listing failed"))?;
        Ok(self.assembler.entries(entries)?)
    }
}
