use entity::sea_orm_active_enums::Role;

use crate::{
    model::auth::RegisterDto,
    server::{
        data::account::AccountRepository,
        error::Error,
        service::auth::AuthService,
        util::enums::role_name,
    },
};

/// Password shared by every demo account
pub static DEMO_PASSWORD: &str = "123456";

/// Login name, display name and role of each demo account
static DEMO_ACCOUNTS: [(&str, &str, Role); 5] = [
    ("planner", "Paula Planner", Role::Planner),
    ("teacher", "Theo Teacher", Role::Teacher),
    ("teacher2", "Tara Teacher", Role::Teacher),
    ("employee", "Emma Employee", Role::Employee),
    ("employee2", "Eric Employee", Role::Employee),
];

impl<'a> AuthService<'a> {
    /// Registers the demo accounts that do not exist yet
    ///
    /// Returns the number of accounts created.
    pub async fn seed_demo_accounts(&self) -> Result<u64, Error> {
        let account_repository = AccountRepository::new(self.db);
        let mut created = 0;

        for (username, name, role) in DEMO_ACCOUNTS {
            if account_repository
                .find_by_login_name(username)
                .await?
                .is_some()
            {
                continue;
            }

            self.register(RegisterDto {
                username: username.to_string(),
                password: DEMO_PASSWORD.to_string(),
                name: name.to_string(),
                role: role_name(role).to_string(),
            })
            .await?;
            created += 1;
        }

        if created > 0 {
            tracing::info!("Seeded {} demo accounts", created);
        }

        Ok(created)
    }
}
