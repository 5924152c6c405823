use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reporting::core::request::ReportRequest;
use crate::modules::time_entries::core::command::ValidationError;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub client: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ExportQuery {
    /// No parameters selects every entry. A partial set is rejected.
    fn into_request(self) -> Result<Option<ReportRequest>, ApplicationError> {
        match (self.client, self.start_date, self.end_date) {
            (None, None, None) => Ok(None),
            (Some(client), Some(start_date), Some(end_date)) => Ok(Some(ReportRequest {
                client,
                start_date,
                end_date,
            })),
            (None, _, _) => Err(ValidationError::MissingField("client").into()),
            (_, None, _) => Err(ValidationError::MissingField("startDate").into()),
            (_, _, None) => Err(ValidationError::MissingField("endDate").into()),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> impl IntoResponse {
    let result = match query.into_request() {
        Ok(request) => state.export_handler.handle(request).await,
        Err(error) => Err(error),
    };
    match result {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"data.csv\""),
            ],
            csv,
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
