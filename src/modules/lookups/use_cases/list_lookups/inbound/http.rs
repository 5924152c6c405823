// Read-only lookup routes over the catalog loaded at startup.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::shell::state::AppState;

fn client_section(section: Option<&Value>) -> Response {
    match section {
        Some(values) => Json(values.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Client not found" })),
        )
            .into_response(),
    }
}

pub async fn clients(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.clients.clone())
}

pub async fn departments(
    State(state): State<AppState>,
    Path(client): Path<String>,
) -> impl IntoResponse {
    client_section(state.catalog.departments_of(&client))
}

pub async fn projects(
    State(state): State<AppState>,
    Path(client): Path<String>,
) -> impl IntoResponse {
    client_section(state.catalog.projects_of(&client))
}

pub async fn counterparties(State(state): State<AppState>) -> impl IntoResponse {
    match &state.catalog.counterparties {
        Value::Null => Json(json!([])),
        values => Json(values.clone()),
    }
}

#[cfg(test)]
mod list_lookups_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::shared::infrastructure::time_entry_store::in_memory::InMemoryTimeEntryStore;
    use crate::tests::fixtures::state::make_test_state;

    use super::{clients, counterparties, departments, projects};

    fn app() -> Router {
        Router::new()
            .route("/clients", get(clients))
            .route("/departments/{client}", get(departments))
            .route("/projects/{client}", get(projects))
            .route("/counterparties", get(counterparties))
            .with_state(make_test_state(Arc::new(InMemoryTimeEntryStore::new())))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case("/clients", json!([{"value": "ACME", "label": "Acme Corporation"}]))]
    #[case("/departments/ACME", json!(["Legal", "Tax"]))]
    #[case("/projects/ACME", json!(["P1", "P2", "EFET", "MSPA"]))]
    #[case("/counterparties", json!(["Globex", "Initech"]))]
    #[tokio::test]
    async fn it_should_serve_the_catalog_sections(#[case] uri: &str, #[case] expected: Value) {
        let (status, json) = get_json(uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, expected);
    }

    #[rstest]
    #[case("/departments/UNKNOWN")]
    #[case("/projects/UNKNOWN")]
    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_client(#[case] uri: &str) {
        let (status, json) = get_json(uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Client not found");
    }
}
