use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use rand::Rng;

use crate::{
    model::auth::{LoginDto, LoginResultDto, SessionUserDto},
    server::{
        data::{account::AccountRepository, auth_session::AuthSessionRepository},
        error::{auth::AuthError, Error},
        service::auth::{password::verify_password, AuthService},
        util::{
            enums::{role_display, role_name},
            time::format_datetime,
        },
    },
};

/// Generates an opaque session token from 32 random bytes
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}

impl<'a> AuthService<'a> {
    /// Verifies credentials and opens a session lasting `ttl_hours`
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    /// Sessions that already expired are purged on every login.
    pub async fn login(&self, payload: LoginDto, ttl_hours: i64) -> Result<LoginResultDto, Error> {
        let username = payload.username.trim().to_string();
        let invalid = || AuthError::InvalidCredentials(username.clone());

        let (account, person) = AccountRepository::new(self.db)
            .find_by_login_name(&username)
            .await?
            .ok_or_else(invalid)?;
        let person = person.ok_or_else(invalid)?;

        if !verify_password(&payload.password, &account.password_hash) {
            return Err(invalid().into());
        }

        let session_repository = AuthSessionRepository::new(self.db);

        let now = Utc::now().naive_utc();
        let purged = session_repository.delete_expired(now).await?;
        if purged > 0 {
            tracing::debug!("Purged {} expired sessions", purged);
        }

        let session = session_repository
            .create(
                &generate_session_id(),
                person.person_id,
                person.role,
                now + Duration::hours(ttl_hours),
            )
            .await?;

        tracing::info!("Person ID {} logged in", person.person_id);

        Ok(LoginResultDto {
            token: session.session_id,
            expires_at: format_datetime(session.expires_at),
            user: SessionUserDto {
                id: person.person_id,
                name: person.name,
                role: role_name(person.role).to_string(),
                role_display: role_display(person.role).to_string(),
                account_id: account.account_id,
            },
        })
    }
}
