// CSV export of time entries.
//
// Without a report request every entry is exported, latest start first. With one, the rows are
// the flat report's entries for that client and window.

use std::sync::Arc;

use chrono_tz::Tz;
use tracing::{error, info};

use crate::modules::reporting::core::aggregator::ReportAggregator;
use crate::modules::reporting::core::assembler::ReportAssembler;
use crate::modules::reporting::core::csv_export::render_csv;
use crate::modules::reporting::core::request::ReportRequest;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

pub struct ExportCsvHandler {
    store: Arc<dyn TimeEntryStore>,
    aggregator: Arc<ReportAggregator>,
    assembler: Arc<ReportAssembler>,
    display_zone: Tz,
}

impl ExportCsvHandler {
    pub fn new(
        store: Arc<dyn TimeEntryStore>,
        aggregator: Arc<ReportAggregator>,
        assembler: Arc<ReportAssembler>,
        display_zone: Tz,
    ) -> Self {
        Self {
            store,
            aggregator,
            assembler,
            display_zone,
        }
    }

    pub async fn handle(&self, request: Option<ReportRequest>) -> Result<String, ApplicationError> {
        let entries = match &request {
            Some(request) => {
                let window = request.window()?;
                self.aggregator
                    .compute_flat(&request.client, window)
                    .await?
                    .entries
            }
            None => self.store.list_all().await?,
        };
        let views = self
            .assembler
            .entries(entries)
            .inspect_err(|e| error!(error = %e, "csv export failed"))?;
        let csv = render_csv(&views, self.display_zone)?;
        info!(rows = views.len(), "csv exported");
        Ok(csv)
    }
}
