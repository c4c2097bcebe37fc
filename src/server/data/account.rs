use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an account for an existing person
    ///
    /// # Arguments
    /// - `person_id`: ID of the person the account logs in as
    /// - `login_name`: Unique login name
    /// - `password_hash`: Argon2 PHC string, never the plain password
    pub async fn create(
        &self,
        person_id: i32,
        login_name: &str,
        password_hash: &str,
    ) -> Result<entity::account::Model, DbErr> {
        let account = entity::account::ActiveModel {
            person_id: ActiveValue::Set(person_id),
            login_name: ActiveValue::Set(login_name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    /// Account with the given login name along with the person it belongs to
    pub async fn find_by_login_name(
        &self,
        login_name: &str,
    ) -> Result<Option<(entity::account::Model, Option<entity::person::Model>)>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::LoginName.eq(login_name))
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await
    }

    pub async fn find_by_person_id(
        &self,
        person_id: i32,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::PersonId.eq(person_id))
            .one(self.db)
            .await
    }
}
