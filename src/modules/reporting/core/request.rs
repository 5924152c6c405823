use serde::Deserialize;

use crate::shared::core::wall_clock::{WallClockError, parse_report_instant};
use crate::shared::infrastructure::time_entry_store::TimeWindow;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub client: String,
    pub start_date: String,
    pub end_date: String,
}

impl ReportRequest {
    pub fn window(&self) -> Result<TimeWindow, WallClockError> {
        Ok(TimeWindow::new(
            parse_report_instant(&self.start_date)?,
            parse_report_instant(&self.end_date)?,
        ))
    }
}
