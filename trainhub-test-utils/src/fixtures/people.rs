use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::PersonModel, TestContext};

impl TestContext {
    pub fn people<'a>(&'a self) -> PeopleFixtures<'a> {
        PeopleFixtures { setup: self }
    }
}

pub struct PeopleFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PeopleFixtures<'a> {
    pub async fn insert_person(&self, name: &str, role: Role) -> Result<PersonModel, TestError> {
        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                role: ActiveValue::Set(role),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_employee(&self, name: &str) -> Result<PersonModel, TestError> {
        self.insert_person(name, Role::Employee).await
    }

    pub async fn insert_teacher(&self, name: &str) -> Result<PersonModel, TestError> {
        self.insert_person(name, Role::Teacher).await
    }

    pub async fn insert_planner(&self, name: &str) -> Result<PersonModel, TestError> {
        self.insert_person(name, Role::Planner).await
    }

    /// Insert a login account with an already computed password hash.
    pub async fn insert_account(
        &self,
        person_id: i32,
        login_name: &str,
        password_hash: &str,
    ) -> Result<entity::account::Model, TestError> {
        Ok(
            entity::prelude::Account::insert(entity::account::ActiveModel {
                person_id: ActiveValue::Set(person_id),
                login_name: ActiveValue::Set(login_name.to_string()),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
