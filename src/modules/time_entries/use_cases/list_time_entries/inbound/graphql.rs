use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::core::entry::TimeEntryView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: String,
    pub pid: String,
    pub client: String,
    pub department: String,
    pub project: String,
    pub counterparty: Option<String>,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub time_diff_hrs_mins: String,
    pub time_diff_decimal: String,
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            id: v.id,
            pid: v.pid,
            client: v.client,
            department: v.department,
            project: v.project,
            counterparty: v.counterparty,
            description: v.description,
            start_time: v.start_time.to_rfc3339(),
            end_time: v.end_time.to_rfc3339(),
            time_diff_hrs_mins: v.time_diff_hrs_mins,
            time_diff_decimal: v.time_diff_decimal,
        }
    }
}

#[derive(Default)]
pub struct TimeEntriesQuery;

#[Object]
impl TimeEntriesQuery {
    async fn time_entries(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.list_handler.handle().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
