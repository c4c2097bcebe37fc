//! HTTP controller endpoints for the training web API.
//!
//! Handlers resolve the caller from the `Session-ID` header, check the role the endpoint
//! is reserved for, delegate to a service and wrap the result in the `{code, message,
//! data}` envelope. Every handler carries a utoipa annotation that feeds the OpenAPI
//! document served at `/api/docs`.

pub mod auth;
pub mod employee;
pub mod health;
pub mod home;
pub mod planner;
pub mod teacher;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{model::api::ApiResponse, server::error::request::RequestError};

/// Success envelope around `data`
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::ok(data)))
}

/// Success envelope around `data` with a custom message
pub fn ok_with<T: Serialize>(message: &str, data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::with_message(message, data)))
}

/// Success envelope without a payload
pub fn done(message: &str) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::message(message)))
}

/// Unwraps an extractor result, turning its rejection into a 400 envelope
///
/// Axum's own rejections answer in plain text; going through [`RequestError`] keeps
/// malformed bodies, queries and paths in the same envelope as every other error.
pub fn accept<T, R: std::fmt::Display>(extracted: Result<T, R>) -> Result<T, RequestError> {
    extracted.map_err(|rejection| RequestError::Validation(rejection.to_string()))
}
