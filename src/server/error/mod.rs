//! Error types for the training server.
//!
//! Domain errors are split by concern: `AuthError` covers sessions and credentials,
//! `RequestError` covers rejected input and business rules, `ConfigError` covers the
//! environment. All of them implement `IntoResponse` and render the uniform
//! `{code, message, data}` envelope with the HTTP status mirrored in `code`.

pub mod auth;
pub mod config;
pub mod oracle;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, oracle::OracleError, request::RequestError,
    },
};

/// Main error type for the training server.
///
/// Aggregates the domain errors and external library errors so `?` converts them
/// automatically. Anything without a dedicated mapping becomes a logged 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variables.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session and credential failures (401/403).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Rejected input or business rule violation (400/403/404).
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Scoring oracle failure that was not recovered locally.
    #[error(transparent)]
    OracleError(#[from] OracleError),
    /// HTTP client construction error.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Password hashing failure.
    #[error("Password hashing failed: {0}")]
    PasswordHashError(String),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

#[cfg(test)]
impl From<Error> for trainhub_test_utils::TestError {
    fn from(err: Error) -> Self {
        Self::Service(err.to_string())
    }
}

/// Build an error envelope with the given status.
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    data: Option<serde_json::Value>,
) -> Response {
    (
        status,
        Json(ErrorDto {
            code: status.as_u16(),
            message: message.into(),
            data,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            None,
        )
    }
}
