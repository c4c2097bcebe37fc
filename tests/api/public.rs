use axum::http::StatusCode;
use trainhub_test_utils::prelude::*;

use crate::TestApp;

/// Expect the liveness probe without the envelope
#[tokio::test]
async fn health_reports_ok() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));

    Ok(())
}

/// Expect personal stats only for a logged in employee or teacher
#[tokio::test]
async fn home_statistics_by_caller() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (_, employee) = app.sign_up("emma", "Emma", "employee").await;
    let (_, planner) = app.sign_up("paula", "Paula", "planner").await;

    let (status, body) = app.get("/api/home/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["courseCount"], 0);
    assert!(body["data"].get("personalStats").is_none());

    let (_, body) = app.get("/api/home/statistics", Some(&employee)).await;
    assert!(body["data"]["personalStats"].is_object());

    let (_, body) = app.get("/api/home/statistics", Some(&planner)).await;
    assert!(body["data"].get("personalStats").is_none());

    Ok(())
}

/// Expect the OpenAPI document to list the planner routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, body) = app.get("/api/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/planner/plans/{planId}").is_some());
    assert!(body["paths"].get("/api/employee/submit-evaluation").is_some());

    Ok(())
}
