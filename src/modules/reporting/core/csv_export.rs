// CSV rendering of entry views. One row per entry, header taken from the field names,
// timestamps shown as `DD.MM.YYYY HH:mm:ss` in the display zone.

use chrono_tz::Tz;
use serde::Serialize;
use thiserror::Error;

use crate::modules::time_entries::core::entry::TimeEntryView;
use crate::shared::core::wall_clock::format_display;

#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("csv output is not utf-8")]
    Encoding,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    pid: &'a str,
    client: &'a str,
    department: &'a str,
    project: &'a str,
    counterparty: Option<&'a str>,
    description: Option<&'a str>,
    start_time: String,
    end_time: String,
    time_diff_hrs_mins: &'a str,
    time_diff_decimal: &'a str,
}

pub fn render_csv(views: &[TimeEntryView], display_zone: Tz) -> Result<String, CsvExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for view in views {
        writer.serialize(CsvRow {
            id: &view.id,
            pid: &view.pid,
            client: &view.client,
            department: &view.department,
            project: &view.project,
            counterparty: view.counterparty.as_deref(),
            description: view.description.as_deref(),
            start_time: format_display(view.start_time, display_zone),
            end_time: format_display(view.end_time, display_zone),
            time_diff_hrs_mins: &view.time_diff_hrs_mins,
            time_diff_decimal: &view.time_diff_decimal,
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| CsvExportError::Csv(error.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| CsvExportError::Encoding)
}
