use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::reporting::core::request::ReportRequest;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

fn respond<T: Serialize>(result: Result<T, ApplicationError>) -> Response {
    match result {
        Ok(report) => Json(report).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn flat(
    State(state): State<AppState>,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.report_handler.flat(&request).await)
}

/// Served on both `/clients/data/A` and `/clients/data/C`.
pub async fn by_department(
    State(state): State<AppState>,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.report_handler.by_department(&request).await)
}

pub async fn by_department_and_project(
    State(state): State<AppState>,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(
        state
            .report_handler
            .by_department_and_project(&request)
            .await,
    )
}

pub async fn annex(
    State(state): State<AppState>,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.report_handler.annex(&request).await)
}
