use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Rejections caused by the request itself rather than by the server.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Malformed or out of range input.
    #[error("{0}")]
    Validation(String),
    /// Referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Caller may not act on the resource, e.g. a course owned by another teacher.
    #[error("{0}")]
    Forbidden(String),
    /// Deletion blocked by dependent rows; `data` carries their counts.
    #[error("{message}")]
    BlockedByDependents {
        message: String,
        data: serde_json::Value,
    },
    /// The teacher already has an overlapping session on that date.
    #[error("Teacher {teacher_name} already has a session overlapping this time")]
    ScheduleConflict { teacher_name: String },
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        match self {
            Self::Validation(message) => error_response(StatusCode::BAD_REQUEST, message, None),
            Self::NotFound(message) => error_response(StatusCode::NOT_FOUND, message, None),
            Self::Forbidden(message) => error_response(StatusCode::FORBIDDEN, message, None),
            Self::BlockedByDependents { message, data } => {
                error_response(StatusCode::BAD_REQUEST, message, Some(data))
            }
            err @ Self::ScheduleConflict { .. } => {
                error_response(StatusCode::BAD_REQUEST, err.to_string(), None)
            }
        }
    }
}
