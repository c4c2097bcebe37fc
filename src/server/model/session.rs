//! Caller identity extracted from the `Session-ID` header.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use entity::sea_orm_active_enums::Role;

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
    service::auth::AuthService,
};

/// Header carrying the opaque session token
pub static SESSION_HEADER: &str = "Session-ID";

/// Authenticated caller of a request
///
/// Extracting it rejects the request with 401 when the header is missing, unknown or
/// expired. Role checks are left to the handler through [`CurrentUser::require`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub person_id: i32,
    pub role: Role,
}

impl CurrentUser {
    /// Reject with 403 unless the caller holds `role`
    pub fn require(&self, role: Role) -> Result<(), AuthError> {
        if self.role != role {
            return Err(AuthError::RoleMismatch {
                required: role,
                actual: self.role,
            });
        }

        Ok(())
    }
}

/// Trimmed `Session-ID` header value, `None` when absent or blank
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(*user);
        }

        let token = session_token(&parts.headers).ok_or(AuthError::MissingSession)?;
        let user = AuthService::new(&state.db).authenticate(&token).await?;

        parts.extensions.insert(user);

        Ok(user)
    }
}

/// Caller identity for public endpoints that personalize their response
///
/// Missing, unknown and expired sessions all resolve to `None`.
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match CurrentUser::from_request_parts(parts, state).await {
            Ok(user) => Ok(MaybeUser(Some(user))),
            Err(Error::AuthError(_)) => Ok(MaybeUser(None)),
            Err(err) => Err(err),
        }
    }
}
