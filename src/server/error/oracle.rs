use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failures of the external scoring oracle.
///
/// Every scoring path recovers from these with a deterministic fallback, so they only
/// reach a client if a caller chooses to propagate them.
#[derive(Error, Debug)]
pub enum OracleError {
    /// No API key configured.
    #[error("Scoring oracle is disabled, no API key configured")]
    Disabled,
    /// Transport failure or timeout.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The oracle answered with a non-success status.
    #[error("Scoring oracle returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The reply carried no choices.
    #[error("Scoring oracle returned no choices")]
    EmptyReply,
    /// The reply content was not a bare number.
    #[error("Scoring oracle reply is not a score: {0:?}")]
    Unparseable(String),
}

impl IntoResponse for OracleError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
