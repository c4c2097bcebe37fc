use super::*;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Role;

use crate::server::data::auth_session::AuthSessionRepository;

/// Expect a stored session to be found and then deleted
#[tokio::test]
async fn create_find_delete() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Person, entity::prelude::AuthSession)?;
    let person = test.people().insert_teacher("Theo").await?;
    let repo = AuthSessionRepository::new(&test.db);
    let expires_at = Utc::now().naive_utc() + Duration::hours(24);

    repo.create("token", person.person_id, Role::Teacher, expires_at)
        .await?;

    let found = repo.find_by_id("token").await?;
    assert_eq!(found.map(|s| s.person_id), Some(person.person_id));

    let deleted = repo.delete("token").await?;
    assert_eq!(deleted.rows_affected, 1);
    assert!(repo.find_by_id("token").await?.is_none());

    Ok(())
}

/// Expect only sessions past their expiry to be purged
#[tokio::test]
async fn delete_expired_keeps_live_sessions() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Person, entity::prelude::AuthSession)?;
    let person = test.people().insert_employee("Emma").await?;
    let repo = AuthSessionRepository::new(&test.db);
    let now = Utc::now().naive_utc();

    repo.create("old", person.person_id, Role::Employee, now - Duration::hours(1))
        .await?;
    repo.create("live", person.person_id, Role::Employee, now + Duration::hours(1))
        .await?;

    let purged = repo.delete_expired(now).await?;

    assert_eq!(purged, 1);
    assert!(repo.find_by_id("old").await?.is_none());
    assert!(repo.find_by_id("live").await?.is_some());

    Ok(())
}
