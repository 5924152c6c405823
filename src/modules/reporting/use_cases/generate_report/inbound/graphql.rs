use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::reporting::core::request::ReportRequest;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::GqlTimeEntry;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlClientReport {
    pub entries: Vec<GqlTimeEntry>,
    pub total_hrs_mins: String,
    pub total_decimal_hours: String,
}

#[derive(SimpleObject)]
pub struct GqlDepartmentTotal {
    pub department: String,
    pub entries: Vec<GqlTimeEntry>,
    pub hrs_mins: String,
    pub decimal_hours: String,
}

#[derive(SimpleObject)]
pub struct GqlDepartmentReport {
    pub client: String,
    pub departments: Vec<GqlDepartmentTotal>,
    pub total_hrs_mins: String,
    pub total_decimal_hours: String,
}

#[derive(Default)]
pub struct ReportQuery;

#[Object]
impl ReportQuery {
    async fn client_report(
        &self,
        context: &Context<'_>,
        client: String,
        start_date: String,
        end_date: String,
    ) -> GqlResult<GqlClientReport> {
        let state = context.data_unchecked::<AppState>();
        let request = ReportRequest {
            client,
            start_date,
            end_date,
        };
        let report = state.report_handler.flat(&request).await?;
        Ok(GqlClientReport {
            entries: report.entries.into_iter().map(Into::into).collect(),
            total_hrs_mins: report.total_hrs_mins,
            total_decimal_hours: report.total_decimal_hours,
        })
    }

    async fn department_report(
        &self,
        context: &Context<'_>,
        client: String,
        start_date: String,
        end_date: String,
    ) -> GqlResult<GqlDepartmentReport> {
        let state = context.data_unchecked::<AppState>();
        let request = ReportRequest {
            client,
            start_date,
            end_date,
        };
        let report = state.report_handler.department_report(&request).await?;
        let assembler = state.report_handler.assembler();

        let mut departments = Vec::with_capacity(report.departments.len());
        for group in report.departments {
            departments.push(GqlDepartmentTotal {
                department: group.department,
                entries: assembler
                    .entries(group.entries)?
                    .into_iter()
                    .map(Into::into)
                    .collect(),
                hrs_mins: group.total.hours_minutes(),
                decimal_hours: group.total.decimal_hours(),
            });
        }

        Ok(GqlDepartmentReport {
            client: assembler.client_label(&request.client),
            departments,
            total_hrs_mins: report.total.hours_minutes(),
            total_decimal_hours: report.total.decimal_hours(),
        })
    }
}
