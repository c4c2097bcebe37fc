use super::*;
use entity::sea_orm_active_enums::PlanStatus;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::server::data::evaluation::EvaluationRepository;

/// Create a teacher, plan, course and one session, returning (employee ID, item ID)
async fn setup_session(test: &TestContext) -> Result<(i32, i32), TestError> {
    let planner = test.people().insert_planner("Paula").await?;
    let teacher = test.people().insert_teacher("Theo").await?;
    let employee = test.people().insert_employee("Emma").await?;
    let plan = test
        .training()
        .insert_plan(planner.person_id, "Plan", PlanStatus::InProgress)
        .await?;
    let course = test
        .training()
        .insert_course(teacher.person_id, "Rust", "Technical")
        .await?;
    let item = test
        .training()
        .insert_item(
            plan.plan_id,
            course.course_id,
            factory::days_ago(1),
            factory::time(9, 0),
            factory::time(10, 0),
        )
        .await?;

    Ok((employee.person_id, item.item_id))
}

/// Expect a repeated self-evaluation to update the existing row instead of adding one
#[tokio::test]
async fn upsert_self_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let (person_id, item_id) = setup_session(&test).await?;
    let repo = EvaluationRepository::new(&test.db);

    repo.upsert_self(person_id, item_id, 70.0, "first").await?;
    repo.upsert_self(person_id, item_id, 80.0, "second").await?;

    let rows = entity::prelude::AttendanceEvaluation::find()
        .count(&test.db)
        .await?;
    assert_eq!(rows, 1);

    let stored = repo.find(person_id, item_id).await?.unwrap();
    assert_eq!(stored.self_score, Some(80.0));
    assert_eq!(stored.self_comment, "second");

    Ok(())
}

/// Expect a self-evaluation resubmission to keep an existing teacher grading
#[tokio::test]
async fn upsert_self_keeps_teacher_columns() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let (person_id, item_id) = setup_session(&test).await?;
    let repo = EvaluationRepository::new(&test.db);

    repo.upsert_self(person_id, item_id, 70.0, "first").await?;
    repo.update_teacher(person_id, item_id, 90.0, "good", 0.6)
        .await?;
    repo.upsert_self(person_id, item_id, 75.0, "again").await?;

    let stored = repo.find(person_id, item_id).await?.unwrap();
    assert_eq!(stored.self_score, Some(75.0));
    assert_eq!(stored.teacher_score, Some(90.0));
    assert_eq!(stored.teacher_comment, "good");
    assert_eq!(stored.score_ratio, 0.6);

    Ok(())
}

/// Expect teacher grading to touch no rows when no self-evaluation exists
#[tokio::test]
async fn update_teacher_requires_row() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let (person_id, item_id) = setup_session(&test).await?;
    let repo = EvaluationRepository::new(&test.db);

    let updated = repo
        .update_teacher(person_id, item_id, 90.0, "good", 0.5)
        .await?;

    assert_eq!(updated, 0);
    assert!(repo.find(person_id, item_id).await?.is_none());

    Ok(())
}
