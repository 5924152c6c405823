use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteTimeEntryResponse {
    pub message: &'static str,
    pub changes: u64,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.delete_handler.handle(&id).await {
        Ok(changes) => Json(DeleteTimeEntryResponse {
            message: "Entry deleted successfully",
            changes,
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
