use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use entigraph::error::EngineError;
use entigraph::orchestrator::Orchestrator;
use entigraph::resolver::DatasetCatalog;
use entigraph::runner::ProcessOutcome;
use entigraph::runner::mock::MockRunner;
use entigraph::server::{AppState, router};

fn app(runner: Arc<MockRunner>) -> Router {
    let orchestrator = Orchestrator::new(
        DatasetCatalog::new("data/dataset_a.xlsx", "data/dataset_b.xlsx"),
        runner,
        2,
        "/entity_network.html",
    );
    router(AppState {
        orchestrator: Arc::new(orchestrator),
    })
}

async fn post_analyze(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn analyze_success_returns_result_and_artifact() {
    let runner = Arc::new(MockRunner::with_stdout("...analysis complete..."));
    let (status, body) = post_analyze(
        app(runner),
        json!({"selectedOption": "ReferenceDatasetA", "userInput": "15.pdf"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "...analysis complete...");
    assert_eq!(body["networkFile"], "/entity_network.html");
    assert_eq!(body["message"], "processed successfully");
}

#[tokio::test]
async fn patterned_failure_is_200_with_error_shaped_result() {
    let runner = Arc::new(MockRunner::with_stdout("Error: Selected data not found"));
    let (status, body) = post_analyze(
        app(runner),
        json!({"selectedOption": "FreeText", "userInput": "hello"}),
    )
    .await;

    // Wire compatibility: domain failures of a clean engine run ride a 200.
    assert_eq!(status, StatusCode::OK);
    assert!(
        body["result"]
            .as_str()
            .unwrap()
            .contains("Error: Selected data not found")
    );
    assert_eq!(body["message"], "selected data not found");
    assert_eq!(body["networkFile"], "");
}

#[tokio::test]
async fn nonzero_exit_is_500_regardless_of_stdout() {
    let runner = Arc::new(MockRunner::new(vec![Ok(ProcessOutcome {
        exit_code: 2,
        stdout: "partial output".to_string(),
        stderr: "boom".to_string(),
    })]));
    let (status, body) = post_analyze(
        app(runner),
        json!({"selectedOption": "FreeText", "userInput": "hello"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error executing analysis engine");
}

#[tokio::test]
async fn spawn_failure_is_500() {
    let runner = Arc::new(MockRunner::new(vec![Err(EngineError::Spawn(
        std::io::Error::from(std::io::ErrorKind::NotFound),
    ))]));
    let (status, body) = post_analyze(
        app(runner),
        json!({"selectedOption": "FreeText", "userInput": "hello"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("engine"));
}

#[tokio::test]
async fn bogus_selection_is_400_and_spawns_nothing() {
    let runner = Arc::new(MockRunner::with_stdout("unused"));
    let (status, body) = post_analyze(
        app(Arc::clone(&runner)),
        json!({"selectedOption": "bogus", "userInput": "x"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("bogus"));
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn missing_fields_are_400_with_field_level_error() {
    let runner = Arc::new(MockRunner::with_stdout("unused"));
    let (status, body) = post_analyze(
        app(Arc::clone(&runner)),
        json!({"selectedOption": "ReferenceDatasetA"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("userInput"));
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn empty_user_input_counts_as_missing() {
    let runner = Arc::new(MockRunner::with_stdout("unused"));
    let (status, body) = post_analyze(
        app(runner),
        json!({"selectedOption": "FreeText", "userInput": ""}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("userInput"));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let runner = Arc::new(MockRunner::with_stdout("unused"));
    let response = app(runner)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
