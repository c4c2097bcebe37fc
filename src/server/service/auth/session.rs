use chrono::Utc;

use crate::server::{
    data::auth_session::AuthSessionRepository,
    error::{auth::AuthError, Error},
    model::session::CurrentUser,
    service::auth::AuthService,
};

impl<'a> AuthService<'a> {
    /// Resolves a session token to the caller
    ///
    /// An expired session is deleted before the request is rejected.
    pub async fn authenticate(&self, session_id: &str) -> Result<CurrentUser, Error> {
        let session_repository = AuthSessionRepository::new(self.db);

        let session = session_repository
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::InvalidSession)?;

        if session.expires_at <= Utc::now().naive_utc() {
            session_repository.delete(session_id).await?;

            return Err(AuthError::SessionExpired(session.person_id).into());
        }

        Ok(CurrentUser {
            person_id: session.person_id,
            role: session.role,
        })
    }

    /// Ends a session, succeeding even if it was already gone
    pub async fn logout(&self, session_id: &str) -> Result<(), Error> {
        let result = AuthSessionRepository::new(self.db)
            .delete(session_id)
            .await?;

        if result.rows_affected > 0 {
            tracing::debug!("Session closed");
        }

        Ok(())
    }
}
