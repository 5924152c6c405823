use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::modules::lookups::use_cases::list_lookups::inbound::http as lookups_http;
use crate::modules::reporting::use_cases::export_csv::inbound::http as export_http;
use crate::modules::reporting::use_cases::generate_report::inbound::http as report_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::http as register_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_http;
use crate::shared::core::errors::ApplicationError;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": error.to_string() })),
            )
                .into_response(),
            ApplicationError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": ApplicationError::NotFound.to_string() })),
            )
                .into_response(),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let entries = Router::new()
        .route("/add-entry", post(register_http::handle))
        .route("/time-entries", get(list_http::handle))
        .route(
            "/time-entries/{id}",
            put(update_http::handle).delete(delete_http::handle),
        );

    let reporting = Router::new()
        .route("/clients/data", post(report_http::flat))
        .route("/clients/data/A", post(report_http::by_department))
        .route("/clients/data/C", post(report_http::by_department))
        .route("/clients/data/B", post(report_http::by_department_and_project))
        .route("/clients/data/AnnexTable", post(report_http::annex))
        .route("/download-csv", get(export_http::handle));

    let lookups = Router::new()
        .route("/clients", get(lookups_http::clients))
        .route("/departments/{client}", get(lookups_http::departments))
        .route("/projects/{client}", get(lookups_http::projects))
        .route("/counterparties", get(lookups_http::counterparties));

    let schema = schema(state.clone());

    Router::new()
        .route("/", get(health))
        .nest("/api/entries", entries)
        .nest("/api/reporting", reporting)
        .nest("/api/generate", lookups)
        .with_state(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn health() -> &'static str {
    "Time reporting API is running"
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::router;
    use crate::modules::time_entries::core::command::ValidationError;
    use crate::shared::core::errors::ApplicationError;
    use crate::shared::infrastructure::time_entry_store::StoreError;
    use crate::shared::infrastructure::time_entry_store::in_memory::InMemoryTimeEntryStore;
    use crate::tests::fixtures::state::make_test_state;
    use axum::response::IntoResponse;

    #[rstest]
    #[case(ApplicationError::Validation(ValidationError::MissingField("pid")), StatusCode::BAD_REQUEST, "error")]
    #[case(ApplicationError::NotFound, StatusCode::NOT_FOUND, "message")]
    #[case(ApplicationError::Store(StoreError::Backend("down".into())), StatusCode::INTERNAL_SERVER_ERROR, "error")]
    #[tokio::test]
    async fn it_should_map_application_errors_to_json_responses(
        #[case] error: ApplicationError,
        #[case] status: StatusCode,
        #[case] key: &str,
    ) {
        let message = error.to_string();

        let response = error.into_response();

        assert_eq!(response.status(), status);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json[key], message);
    }

    #[rstest]
    #[case("GET", "/")]
    #[case("GET", "/gql")]
    #[case("GET", "/api/entries/time-entries")]
    #[case("GET", "/api/reporting/download-csv")]
    #[case("GET", "/api/generate/clients")]
    #[case("GET", "/api/generate/counterparties")]
    #[tokio::test]
    async fn it_should_mount_every_read_route(#[case] method: &str, #[case] uri: &str) {
        let app = router(make_test_state(Arc::new(InMemoryTimeEntryStore::new())));

        let response = app
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("/api/reporting/clients/data")]
    #[case("/api/reporting/clients/data/A")]
    #[case("/api/reporting/clients/data/B")]
    #[case("/api/reporting/clients/data/C")]
    #[case("/api/reporting/clients/data/AnnexTable")]
    #[tokio::test]
    async fn it_should_mount_every_report_route(#[case] uri: &str) {
        let app = router(make_test_state(Arc::new(InMemoryTimeEntryStore::new())));
        let body = r#"{"client":"ACME","startDate":"2024-03-01","endDate":"2024-03-31"}"#;

        let response = app
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
