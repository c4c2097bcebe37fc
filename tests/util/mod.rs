//! In-process HTTP harness over the full application router.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use trainhub::server::{
    model::{app::AppState, session::SESSION_HEADER},
    service::scoring::oracle::ScoringOracle,
    startup,
};
use trainhub_test_utils::{
    constant::{TEST_ORACLE_API_KEY, TEST_ORACLE_MODEL, TEST_PASSWORD},
    prelude::*,
};

/// Largest response body the harness reads
static MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application router on top of a [`TestContext`]
pub struct TestApp {
    pub test: TestContext,
    router: Router,
}

impl TestApp {
    /// Router with the scoring oracle disabled
    pub async fn new() -> Result<Self, TestError> {
        let test = test_setup_with_training_tables!()?;

        Ok(Self::with_oracle(test, ScoringOracle::disabled()))
    }

    /// Router whose scoring oracle is the context's mock server
    pub fn with_mock_oracle(test: TestContext) -> Self {
        let oracle = ScoringOracle::new(
            reqwest::Client::new(),
            test.oracle_url(),
            Some(TEST_ORACLE_API_KEY.to_string()),
            TEST_ORACLE_MODEL,
        );

        Self::with_oracle(test, oracle)
    }

    fn with_oracle(test: TestContext, oracle: ScoringOracle) -> Self {
        let router = startup::build_router(AppState {
            db: test.db.clone(),
            oracle,
            session_ttl_hours: 24,
        });

        Self { test, router }
    }

    /// Sends a request and returns the status with the parsed JSON body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(SESSION_HEADER, token);
        }
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }

    /// Registers an account through the API and logs it in
    ///
    /// Returns the new person ID and the session token.
    pub async fn sign_up(&self, username: &str, name: &str, role: &str) -> (i32, String) {
        let (status, registered) = self
            .post(
                "/api/auth/register",
                None,
                json!({
                    "username": username,
                    "password": TEST_PASSWORD,
                    "name": name,
                    "role": role,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {}", registered);

        let (status, login) = self
            .post(
                "/api/auth/login",
                None,
                json!({ "username": username, "password": TEST_PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", login);

        let person_id = registered["data"]["personId"].as_i64().unwrap() as i32;
        let token = login["data"]["token"].as_str().unwrap().to_string();

        (person_id, token)
    }
}
