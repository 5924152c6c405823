use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::time_entries::core::command::TimeEntryInput;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RegisterTimeEntryResponse {
    pub message: &'static str,
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<TimeEntryInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.register_handler.handle(body).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(RegisterTimeEntryResponse {
                message: "Entry added successfully",
                id,
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
