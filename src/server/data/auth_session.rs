use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct AuthSessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthSessionRepository<'a, C> {
    /// Creates a new instance of [`AuthSessionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        session_id: &str,
        person_id: i32,
        role: Role,
        expires_at: NaiveDateTime,
    ) -> Result<entity::auth_session::Model, DbErr> {
        let session = entity::auth_session::ActiveModel {
            session_id: ActiveValue::Set(session_id.to_string()),
            person_id: ActiveValue::Set(person_id),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            expires_at: ActiveValue::Set(expires_at),
        };

        session.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        session_id: &str,
    ) -> Result<Option<entity::auth_session::Model>, DbErr> {
        entity::prelude::AuthSession::find_by_id(session_id.to_string())
            .one(self.db)
            .await
    }

    /// Deletes a session
    ///
    /// Returns OK regardless of the session existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, session_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::AuthSession::delete_by_id(session_id.to_string())
            .exec(self.db)
            .await
    }

    /// Deletes every session that expired before `now`
    pub async fn delete_expired(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthSession::delete_many()
            .filter(entity::auth_session::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
