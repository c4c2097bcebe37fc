use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures read from the process environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `DATABASE_URL` or another required variable is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A port, pool bound, timeout or flag that does not parse.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl ConfigError {
    /// Name of the offending environment variable
    pub fn var(&self) -> &str {
        match self {
            Self::MissingEnvVar(var) => var,
            Self::InvalidEnvValue { var, .. } => var,
        }
    }
}

/// Configuration is read before serving, so reaching a handler means a server bug
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
