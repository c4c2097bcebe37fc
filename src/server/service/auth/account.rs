use entity::sea_orm_active_enums::Role;

use crate::{
    model::auth::{AccountStatsDto, CurrentUserDto},
    server::{
        data::{account::AccountRepository, person::PersonRepository},
        error::{request::RequestError, Error},
        model::session::CurrentUser,
        service::{auth::AuthService, statistics::overview::StatisticsService},
        util::{
            enums::{role_display, role_name},
            time::local_now,
        },
    },
};

impl<'a> AuthService<'a> {
    /// Profile of the caller with statistics for their role
    pub async fn current_user(&self, user: CurrentUser) -> Result<CurrentUserDto, Error> {
        let person = PersonRepository::new(self.db)
            .find_by_id(user.person_id)
            .await?
            .ok_or_else(|| RequestError::NotFound("User not found".to_string()))?;
        let account = AccountRepository::new(self.db)
            .find_by_person_id(user.person_id)
            .await?
            .ok_or_else(|| RequestError::NotFound("Account not found".to_string()))?;

        let statistics = StatisticsService::new(self.db);
        let today = local_now().date();
        let statistics = match person.role {
            Role::Employee => AccountStatsDto::Employee(
                statistics
                    .employee_overview(person.person_id, today)
                    .await?
                    .into(),
            ),
            Role::Teacher => AccountStatsDto::Teacher(
                statistics
                    .teacher_overview(person.person_id, today)
                    .await?
                    .into(),
            ),
            Role::Planner => {
                AccountStatsDto::Planner(statistics.planner_overview(person.person_id).await?)
            }
        };

        Ok(CurrentUserDto {
            person_id: person.person_id,
            name: person.name,
            role: role_name(person.role).to_string(),
            role_display: role_display(person.role).to_string(),
            account_id: account.account_id,
            username: account.login_name,
            statistics,
        })
    }
}
