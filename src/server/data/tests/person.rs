use super::*;
use entity::sea_orm_active_enums::Role;

use crate::server::data::person::PersonRepository;

/// Expect a created person to be found by ID with its role
#[tokio::test]
async fn creates_and_finds_person() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Person)?;
    let repo = PersonRepository::new(&test.db);

    let created = repo.create("Ada", Role::Teacher).await?;
    let found = repo.find_by_id(created.person_id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.name, "Ada");
    assert_eq!(found.role, Role::Teacher);

    Ok(())
}

/// Expect role filters to only return and count persons with that role
#[tokio::test]
async fn filters_by_role() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Person)?;
    test.people().insert_employee("Emma").await?;
    test.people().insert_employee("Eli").await?;
    test.people().insert_teacher("Theo").await?;
    let repo = PersonRepository::new(&test.db);

    let employees = repo.find_by_role(Role::Employee).await?;

    assert_eq!(employees.len(), 2);
    assert!(employees.iter().all(|p| p.role == Role::Employee));
    assert_eq!(repo.count_by_role(Role::Teacher).await?, 1);
    assert_eq!(repo.count_by_role(Role::Planner).await?, 0);

    Ok(())
}

/// Expect an empty ID list to return no persons without querying
#[tokio::test]
async fn find_by_ids_empty() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Person)?;
    test.people().insert_employee("Emma").await?;
    let repo = PersonRepository::new(&test.db);

    let result = repo.find_by_ids(&[]).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Expect Error when the person table does not exist
#[tokio::test]
async fn error_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let repo = PersonRepository::new(&test.db);

    let result = repo.create("Ada", Role::Teacher).await;

    assert!(result.is_err());

    Ok(())
}
