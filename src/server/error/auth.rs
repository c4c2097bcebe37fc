use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::Role;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request does not carry a Session-ID header")]
    MissingSession,
    #[error("Session ID does not match any active session")]
    InvalidSession,
    #[error("Session for person ID {0} has expired")]
    SessionExpired(i32),
    #[error("Endpoint requires role {required:?} but session has role {actual:?}")]
    RoleMismatch { required: Role, actual: Role },
    #[error("Login failed for username {0:?}")]
    InvalidCredentials(String),
    #[error("Username {0:?} is already registered")]
    UsernameTaken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingSession => error_response(StatusCode::UNAUTHORIZED, "Not logged in", None),
            Self::InvalidSession => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid session", None)
            }
            Self::SessionExpired(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Session expired, please log in again",
                None,
            ),
            Self::RoleMismatch { .. } => {
                error_response(StatusCode::FORBIDDEN, "Permission denied", None)
            }
            Self::InvalidCredentials(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Incorrect username or password",
                None,
            ),
            Self::UsernameTaken(_) => {
                error_response(StatusCode::BAD_REQUEST, "Username already exists", None)
            }
        }
    }
}
