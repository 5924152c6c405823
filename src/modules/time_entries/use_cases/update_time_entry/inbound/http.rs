use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::time_entries::core::command::TimeEntryInput;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct UpdateTimeEntryResponse {
    pub message: &'static str,
    pub changes: u64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TimeEntryInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.update_handler.handle(&id, body).await {
        Ok(changes) => Json(UpdateTimeEntryResponse {
            message: "Entry updated successfully",
            changes,
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
