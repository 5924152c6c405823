use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::time_entries::core::entry::TimeEntryView;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ListTimeEntriesResponse {
    pub success: bool,
    pub entries: Vec<TimeEntryView>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_handler.handle().await {
        Ok(entries) => Json(ListTimeEntriesResponse {
            success: true,
            entries,
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
