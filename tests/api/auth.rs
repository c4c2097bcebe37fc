use axum::http::StatusCode;
use serde_json::json;
use trainhub_test_utils::{constant::TEST_PASSWORD, prelude::*};

use crate::TestApp;

/// Expect a registered user to log in, see their profile and log out
#[tokio::test]
async fn register_login_logout() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (person_id, token) = app.sign_up("emma", "Emma", "employee").await;

    let (status, body) = app.get("/api/auth/current-user", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["personId"], person_id);
    assert_eq!(body["data"]["role"], "employee");
    assert_eq!(body["data"]["statistics"]["trainingPlanCount"], 0);

    let (status, _) = app.post("/api/auth/logout", Some(&token), json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/auth/current-user", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 401);

    Ok(())
}

/// Expect a missing header and a made up token to be rejected with 401
#[tokio::test]
async fn rejects_missing_and_unknown_sessions() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, body) = app.get("/api/auth/current-user", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not logged in");

    let (status, _) = app
        .get("/api/employee/learning-progress", Some("not-a-session"))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect wrong passwords, taken usernames and unknown roles to be refused
#[tokio::test]
async fn rejects_bad_credentials_and_duplicates() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    app.sign_up("tom", "Tom", "teacher").await;

    let (status, _) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": "tom", "password": "wrong-password" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({ "username": "tom", "password": TEST_PASSWORD, "name": "Tommy", "role": "teacher" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");

    let (status, _) = app
        .post(
            "/api/auth/register",
            None,
            json!({ "username": "zed", "password": TEST_PASSWORD, "name": "Zed", "role": "admin" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a malformed body to produce the error envelope rather than plain text
#[tokio::test]
async fn malformed_body_uses_envelope() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, body) = app
        .post("/api/auth/login", None, json!({ "username": "emma" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    Ok(())
}

/// Expect endpoints of another role to answer 403
#[tokio::test]
async fn role_mismatch_is_forbidden() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (_, employee) = app.sign_up("emma", "Emma", "employee").await;
    let (_, planner) = app.sign_up("paula", "Paula", "planner").await;

    let (status, body) = app.get("/api/planner/plans", Some(&employee)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Permission denied");

    let (status, _) = app.get("/api/teacher/pending-evaluations", Some(&planner)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}
