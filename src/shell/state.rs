use std::sync::Arc;

use crate::modules::lookups::core::catalog::Catalog;
use crate::modules::reporting::core::aggregator::ReportAggregator;
use crate::modules::reporting::core::assembler::ReportAssembler;
use crate::modules::reporting::use_cases::export_csv::handler::ExportCsvHandler;
use crate::modules::reporting::use_cases::generate_report::handler::GenerateReportHandler;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::ListTimeEntriesHandler;
use crate::modules::time_entries::use_cases::register_time_entry::handler::RegisterTimeEntryHandler;
use crate::modules::time_entries::use_cases::update_time_entry::handler::UpdateTimeEntryHandler;
use crate::shared::config::AppConfig;
use crate::shared::infrastructure::time_entry_store::TimeEntryStore;

#[derive(Clone)]
pub struct AppState {
    pub register_handler: Arc<RegisterTimeEntryHandler>,
    pub update_handler: Arc<UpdateTimeEntryHandler>,
    pub delete_handler: Arc<DeleteTimeEntryHandler>,
    pub list_handler: Arc<ListTimeEntriesHandler>,
    pub report_handler: Arc<GenerateReportHandler>,
    pub export_handler: Arc<ExportCsvHandler>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(store: Arc<dyn TimeEntryStore>, catalog: Catalog, config: &AppConfig) -> Self {
        let assembler = Arc::new(ReportAssembler::new(Arc::new(catalog.client_labels())));
        let aggregator = Arc::new(ReportAggregator::new(
            store.clone(),
            config.report_concurrency,
        ));
        Self {
            register_handler: Arc::new(RegisterTimeEntryHandler::new(
                store.clone(),
                config.source_time_zone,
            )),
            update_handler: Arc::new(UpdateTimeEntryHandler::new(
                store.clone(),
                config.source_time_zone,
            )),
            delete_handler: Arc::new(DeleteTimeEntryHandler::new(store.clone())),
            list_handler: Arc::new(ListTimeEntriesHandler::new(
                store.clone(),
                assembler.clone(),
            )),
            report_handler: Arc::new(GenerateReportHandler::new(
                aggregator.clone(),
                assembler.clone(),
            )),
            export_handler: Arc::new(ExportCsvHandler::new(
                store,
                aggregator,
                assembler,
                config.display_time_zone,
            )),
            catalog: Arc::new(catalog),
        }
    }
}
