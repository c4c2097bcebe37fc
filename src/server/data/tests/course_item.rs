use super::*;
use entity::sea_orm_active_enums::PlanStatus;

use crate::server::data::course_item::{CourseItemRepository, ItemFilter};

/// Expect date range and plan filters to apply and results to be ordered by date
#[tokio::test]
async fn find_filters_and_orders() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let planner = test.people().insert_planner("Paula").await?;
    let teacher = test.people().insert_teacher("Theo").await?;
    let plan = test
        .training()
        .insert_plan(planner.person_id, "Plan", PlanStatus::InProgress)
        .await?;
    let course = test
        .training()
        .insert_course(teacher.person_id, "Rust", "Technical")
        .await?;
    let later = test
        .training()
        .insert_item(
            plan.plan_id,
            course.course_id,
            factory::date(2024, 1, 20),
            factory::time(9, 0),
            factory::time(10, 0),
        )
        .await?;
    let earlier = test
        .training()
        .insert_item(
            plan.plan_id,
            course.course_id,
            factory::date(2024, 1, 15),
            factory::time(9, 0),
            factory::time(10, 0),
        )
        .await?;
    test.training()
        .insert_item(
            plan.plan_id,
            course.course_id,
            factory::date(2024, 2, 1),
            factory::time(9, 0),
            factory::time(10, 0),
        )
        .await?;
    let repo = CourseItemRepository::new(&test.db);

    let items = repo
        .find(ItemFilter {
            plan_ids: Some(vec![plan.plan_id]),
            from: Some(factory::date(2024, 1, 1)),
            to: Some(factory::date(2024, 1, 31)),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = items.iter().map(|i| i.item_id).collect();
    assert_eq!(ids, vec![earlier.item_id, later.item_id]);

    Ok(())
}

/// Expect same-date lookups to honour the excluded session
#[tokio::test]
async fn find_on_date_excludes_item() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let planner = test.people().insert_planner("Paula").await?;
    let teacher = test.people().insert_teacher("Theo").await?;
    let plan = test
        .training()
        .insert_plan(planner.person_id, "Plan", PlanStatus::InProgress)
        .await?;
    let course = test
        .training()
        .insert_course(teacher.person_id, "Rust", "Technical")
        .await?;
    let date = factory::date(2024, 1, 15);
    let first = test
        .training()
        .insert_item(plan.plan_id, course.course_id, date, factory::time(9, 0), factory::time(10, 0))
        .await?;
    let second = test
        .training()
        .insert_item(plan.plan_id, course.course_id, date, factory::time(13, 0), factory::time(14, 0))
        .await?;
    let repo = CourseItemRepository::new(&test.db);

    let all = repo.find_on_date(&[course.course_id], date, None).await?;
    let others = repo
        .find_on_date(&[course.course_id], date, Some(first.item_id))
        .await?;

    assert_eq!(all.len(), 2);
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].item_id, second.item_id);

    Ok(())
}

/// Expect sessions to be joined with course, plan and teacher name
#[tokio::test]
async fn load_sessions_joins_related_rows() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let planner = test.people().insert_planner("Paula").await?;
    let teacher = test.people().insert_teacher("Theo").await?;
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
            factory::date(2024, 1, 15),
            factory::time(9, 0),
            factory::time(10, 0),
        )
        .await?;
    let repo = CourseItemRepository::new(&test.db);

    let sessions = repo.load_sessions(vec![item.clone()]).await?;

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].item.item_id, item.item_id);
    assert_eq!(sessions[0].course.course_name, "Rust");
    assert_eq!(sessions[0].plan.plan_name, "Plan");
    assert_eq!(sessions[0].teacher_name, "Theo");

    Ok(())
}
