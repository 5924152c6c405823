// End-to-end scenarios through the full router: entries are logged over HTTP, then reported.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shared::config::AppConfig;
use crate::shared::infrastructure::time_entry_store::in_memory::InMemoryTimeEntryStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::test_catalog;

fn app_with_concurrency(concurrency: usize) -> Router {
    let config = AppConfig {
        report_concurrency: concurrency,
        ..AppConfig::default()
    };
    router(AppState::new(
        Arc::new(InMemoryTimeEntryStore::new()),
        test_catalog(),
        &config,
    ))
}

async fn call(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn log_entry(app: &Router, department: &str, project: &str, start: &str, end: &str) -> String {
    let (status, json) = call(
        app,
        "POST",
        "/api/entries/add-entry",
        json!({
            "pid": "P-100",
            "client": "ACME",
            "department": department,
            "project": project,
            "counterparty": "Globex",
            "start_time": start,
            "end_time": end,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_string()
}

fn march() -> Value {
    json!({"client": "ACME", "startDate": "2024-03-01", "endDate": "2024-03-31T23:59:59Z"})
}

#[rstest]
#[case(1)]
#[case(4)]
#[tokio::test]
async fn it_should_report_logged_time_at_every_level(#[case] concurrency: usize) {
    let app = app_with_concurrency(concurrency);
    log_entry(&app, "Legal", "P1", "2024-03-04 09:00", "2024-03-04 10:00").await;
    log_entry(&app, "Legal", "EFET", "2024-03-05 09:00", "2024-03-05 09:30").await;
    log_entry(&app, "Tax", "MSPA", "2024-03-06 13:00", "2024-03-06 15:15").await;
    log_entry(&app, "Audit", "P1", "2024-04-02 09:00", "2024-04-02 10:00").await;

    let (status, flat) = call(&app, "POST", "/api/reporting/clients/data", march()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flat["entries"].as_array().unwrap().len(), 3);
    assert_eq!(flat["totalHrsMins"], "3:45");
    assert_eq!(flat["totalDecimalHours"], "3.75");

    let (_, by_department) = call(&app, "POST", "/api/reporting/clients/data/C", march()).await;
    assert_eq!(by_department["client"], "Acme Corporation");
    assert_eq!(by_department["deptHrsMins"], json!(["1:30", "2:15", "0:00"]));
    assert_eq!(by_department["entries"][2], json!([]));
    assert_eq!(by_department["totalHrsMins"], "3:45");

    let (_, nested) = call(&app, "POST", "/api/reporting/clients/data/B", march()).await;
    assert_eq!(nested["projHrsMins"], json!(["0:30", "1:00", "2:15"]));
    assert_eq!(nested["deptHrsMins"], json!(["1:30", "2:15", "0:00"]));
    assert_eq!(nested["deptProjectEntries"]["Audit"], json!({}));

    let (_, annex) = call(&app, "POST", "/api/reporting/clients/data/AnnexTable", march()).await;
    assert_eq!(
        annex["projectTimes"],
        json!({
            "EFET": [{"project": "EFET", "counterparty": "Globex", "total_time_diff": "0:30"}],
            "MSPA": [{"project": "MSPA", "counterparty": "Globex", "total_time_diff": "2:15"}]
        })
    );
}

#[tokio::test]
async fn it_should_reflect_updates_and_deletes_in_reports() {
    let app = app_with_concurrency(1);
    let kept = log_entry(&app, "Legal", "P1", "2024-03-04 09:00", "2024-03-04 10:00").await;
    let dropped = log_entry(&app, "Legal", "P1", "2024-03-05 09:00", "2024-03-05 12:00").await;

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/api/entries/time-entries/{kept}"),
        json!({
            "pid": "P-100",
            "client": "ACME",
            "department": "Legal",
            "project": "P1",
            "start_time": "2024-03-04 09:00",
            "end_time": "2024-03-04 11:45",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(
        &app,
        "DELETE",
        &format!("/api/entries/time-entries/{dropped}"),
        Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, flat) = call(&app, "POST", "/api/reporting/clients/data", march()).await;

    assert_eq!(flat["entries"].as_array().unwrap().len(), 1);
    assert_eq!(flat["entries"][0]["id"], kept.as_str());
    assert_eq!(flat["entries"][0]["counterparty"], Value::Null);
    assert_eq!(flat["totalHrsMins"], "2:45");
}

#[tokio::test]
async fn it_should_report_zero_for_an_unknown_client() {
    let app = app_with_concurrency(2);
    log_entry(&app, "Legal", "P1", "2024-03-04 09:00", "2024-03-04 10:00").await;
    let request = json!({"client": "NOBODY", "startDate": "2024-03-01", "endDate": "2024-03-31"});

    let (_, flat) = call(&app, "POST", "/api/reporting/clients/data", request.clone()).await;
    let (_, by_department) = call(&app, "POST", "/api/reporting/clients/data/A", request).await;

    assert_eq!(flat["entries"], json!([]));
    assert_eq!(flat["totalHrsMins"], "0:00");
    assert_eq!(by_department["client"], "NOBODY");
    assert_eq!(by_department["entries"], json!([]));
    assert_eq!(by_department["totalDecHrsMins"], "0.00");
}

#[tokio::test]
async fn it_should_round_decimal_hours_half_up() {
    let app = app_with_concurrency(2);
    log_entry(&app, "Legal", "P1", "2024-03-04 09:00", "2024-03-04 09:07:30").await;

    let (status, flat) = call(&app, "POST", "/api/reporting/clients/data", march()).await;
    let (_, by_department) = call(&app, "POST", "/api/reporting/clients/data/A", march()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(flat["entries"][0]["time_diff_decimal"], "0.13");
    assert_eq!(flat["totalDecimalHours"], "0.13");
    assert_eq!(by_department["deptDecHrsMins"], json!(["0.13"]));
    assert_eq!(by_department["totalDecHrsMins"], "0.13");
}
