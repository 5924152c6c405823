// Shapes aggregated reports into their response payloads.
//
// Responsibilities
// - Resolve client codes to display labels, on every entry and on the report itself.
// - Render totals as `H:MM` and decimal hours.
// - Keep per-group arrays aligned with discovery order.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::modules::reporting::core::annex::AnnexCategory;
use crate::modules::reporting::core::report::{
    AnnexReport, DepartmentProjectReport, DepartmentReport, FlatReport,
};
use crate::modules::reporting::core::request::ReportRequest;
use crate::modules::time_entries::core::entry::{TimeEntry, TimeEntryView};
use crate::shared::core::client_labels::ClientLabels;
use crate::shared::core::duration::DurationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatReportResponse {
    pub success: bool,
    pub entries: Vec<TimeEntryView>,
    pub total_hrs_mins: String,
    pub total_decimal_hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentReportResponse {
    pub success: bool,
    pub entries: Vec<Vec<TimeEntryView>>,
    pub dept_hrs_mins: Vec<String>,
    pub dept_dec_hrs_mins: Vec<String>,
    pub total_hrs_mins: String,
    pub total_dec_hrs_mins: String,
    pub client: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentProjectReportResponse {
    pub success: bool,
    pub entries: Vec<Vec<TimeEntryView>>,
    pub dept_project_entries: BTreeMap<String, BTreeMap<String, Vec<TimeEntryView>>>,
    pub proj_hrs_mins: Vec<String>,
    pub proj_dec_hrs_mins: Vec<String>,
    pub dept_hrs_mins: Vec<String>,
    pub dept_dec_hrs_mins: Vec<String>,
    pub total_hrs_mins: String,
    pub total_dec_hrs_mins: String,
    pub client: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnexRowResponse {
    pub project: String,
    pub counterparty: Option<String>,
    pub total_time_diff: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnexReportResponse {
    pub success: bool,
    pub client: String,
    pub start_date: String,
    pub end_date: String,
    pub project_times: BTreeMap<AnnexCategory, Vec<AnnexRowResponse>>,
}

pub struct ReportAssembler {
    labels: Arc<ClientLabels>,
}

impl ReportAssembler {
    pub fn new(labels: Arc<ClientLabels>) -> Self {
        Self { labels }
    }

    pub fn client_label(&self, code: &str) -> String {
        self.labels.resolve(code).to_string()
    }

    pub fn entries(&self, entries: Vec<TimeEntry>) -> Result<Vec<TimeEntryView>, DurationError> {
        entries
            .into_iter()
            .map(|entry| TimeEntryView::from_entry(entry, &self.labels))
            .collect()
    }

    pub fn flat(&self, report: FlatReport) -> Result<FlatReportResponse, DurationError> {
        Ok(FlatReportResponse {
            success: true,
            entries: self.entries(report.entries)?,
            total_hrs_mins: report.total.hours_minutes(),
            total_decimal_hours: report.total.decimal_hours(),
        })
    }

    pub fn by_department(
        &self,
        client: &str,
        report: DepartmentReport,
    ) -> Result<DepartmentReportResponse, DurationError> {
        let mut response = DepartmentReportResponse {
            success: true,
            entries: Vec::with_capacity(report.departments.len()),
            dept_hrs_mins: Vec::with_capacity(report.departments.len()),
            dept_dec_hrs_mins: Vec::with_capacity(report.departments.len()),
            total_hrs_mins: report.total.hours_minutes(),
            total_dec_hrs_mins: report.total.decimal_hours(),
            client: self.client_label(client),
        };
        for group in report.departments {
            response.dept_hrs_mins.push(group.total.hours_minutes());
            response.dept_dec_hrs_mins.push(group.total.decimal_hours());
            response.entries.push(self.entries(group.entries)?);
        }
        Ok(response)
    }

    pub fn by_department_and_project(
        &self,
        client: &str,
        report: DepartmentProjectReport,
    ) -> Result<DepartmentProjectReportResponse, DurationError> {
        let mut response = DepartmentProjectReportResponse {
            success: true,
            entries: Vec::new(),
            dept_project_entries: BTreeMap::new(),
            proj_hrs_mins: Vec::new(),
            proj_dec_hrs_mins: Vec::new(),
            dept_hrs_mins: Vec::with_capacity(report.departments.len()),
            dept_dec_hrs_mins: Vec::with_capacity(report.departments.len()),
            total_hrs_mins: report.total.hours_minutes(),
            total_dec_hrs_mins: report.total.decimal_hours(),
            client: self.client_label(client),
        };
        for department in report.departments {
            let by_project = response
                .dept_project_entries
                .entry(department.department)
                .or_default();
            for project in department.projects {
                let views = self.entries(project.entries)?;
                response.proj_hrs_mins.push(project.total.hours_minutes());
                response.proj_dec_hrs_mins.push(project.total.decimal_hours());
                by_project.insert(project.project, views.clone());
                response.entries.push(views);
            }
            response.dept_hrs_mins.push(department.total.hours_minutes());
            response.dept_dec_hrs_mins.push(department.total.decimal_hours());
        }
        Ok(response)
    }

    pub fn annex(&self, request: &ReportRequest, report: AnnexReport) -> AnnexReportResponse {
        let project_times = report
            .categories
            .into_iter()
            .map(|(category, rows)| {
                let rows = rows
                    .into_iter()
                    .map(|row| AnnexRowResponse {
                        total_time_diff: row.total.hours_minutes(),
                        project: row.project,
                        counterparty: row.counterparty,
                    })
                    .collect();
                (category, rows)
            })
            .collect();
        AnnexReportResponse {
            success: true,
            client: self.client_label(&request.client),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            project_times,
        }
    }
}
