use sea_orm::TransactionTrait;

use crate::{
    model::auth::{RegisterDto, RegisteredDto},
    server::{
        data::{account::AccountRepository, person::PersonRepository},
        error::{auth::AuthError, request::RequestError, Error},
        service::auth::{password::hash_password, AuthService},
        util::{
            enums::{parse_role, role_display, role_name},
            validate,
        },
    },
};

impl<'a> AuthService<'a> {
    /// Registers a person with a login account
    ///
    /// Validation happens before any write. The person and account rows are inserted in
    /// one transaction so a failed account insert leaves no orphaned person.
    ///
    /// # Returns
    /// - `Ok(RegisteredDto)` - IDs of the new person and account
    /// - `Err(Error::RequestError)` - Invalid username, password, name or role
    /// - `Err(Error::AuthError(AuthError::UsernameTaken))` - Login name already in use
    pub async fn register(&self, payload: RegisterDto) -> Result<RegisteredDto, Error> {
        let username = validate::text("username", &payload.username, 3, 20)?;
        let name = validate::text("name", &payload.name, 2, 20)?;
        let role = parse_role(&payload.role)?;
        let password_len = payload.password.chars().count();
        if !(6..=20).contains(&password_len) {
            return Err(RequestError::Validation("password must be 6-20 characters".to_string()).into());
        }

        let password_hash = hash_password(&payload.password)?;

        let txn = self.db.begin().await?;

        if AccountRepository::new(&txn)
            .find_by_login_name(&username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken(username).into());
        }

        let person = PersonRepository::new(&txn).create(&name, role).await?;
        let account = AccountRepository::new(&txn)
            .create(person.person_id, &username, &password_hash)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Registered {} {} as person ID {}",
            role_name(role),
            username,
            person.person_id
        );

        Ok(RegisteredDto {
            person_id: person.person_id,
            account_id: account.account_id,
            username: account.login_name,
            name: person.name,
            role: role_name(role).to_string(),
            role_display: role_display(role).to_string(),
        })
    }
}
