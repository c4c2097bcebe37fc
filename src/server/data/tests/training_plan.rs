use super::*;
use entity::sea_orm_active_enums::PlanStatus;

use crate::server::data::training_plan::{PlanChanges, PlanFilter, TrainingPlanRepository};

/// Expect status and keyword filters to narrow the page and the total
#[tokio::test]
async fn find_page_filters_by_status_and_keyword() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let planner = test.people().insert_planner("Paula").await?;
    test.training()
        .insert_plan(planner.person_id, "Rust onboarding", PlanStatus::Planning)
        .await?;
    test.training()
        .insert_plan(planner.person_id, "Rust advanced", PlanStatus::InProgress)
        .await?;
    test.training()
        .insert_plan(planner.person_id, "Safety refresher", PlanStatus::Planning)
        .await?;
    let repo = TrainingPlanRepository::new(&test.db);

    let filter = PlanFilter {
        status: Some(PlanStatus::Planning),
        keyword: Some("Rust".to_string()),
        ..Default::default()
    };
    let (plans, total) = repo.find_page(filter, 1, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].plan_name, "Rust onboarding");

    Ok(())
}

/// Expect pages to split the result set while the total stays constant
#[tokio::test]
async fn find_page_paginates() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let planner = test.people().insert_planner("Paula").await?;
    for i in 0..3 {
        test.training()
            .insert_plan(planner.person_id, &format!("Plan {}", i), PlanStatus::Planning)
            .await?;
    }
    let repo = TrainingPlanRepository::new(&test.db);

    let filter = PlanFilter {
        sort_by: entity::training_plan::Column::PlanId,
        descending: false,
        ..Default::default()
    };
    let (second_page, total) = repo.find_page(filter, 2, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].plan_name, "Plan 2");

    Ok(())
}

/// Expect update to change only the provided columns
#[tokio::test]
async fn update_is_partial() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let planner = test.people().insert_planner("Paula").await?;
    let plan = test
        .training()
        .insert_plan(planner.person_id, "Before", PlanStatus::Planning)
        .await?;
    let repo = TrainingPlanRepository::new(&test.db);

    let updated = repo
        .update(
            plan.clone(),
            PlanChanges {
                plan_status: Some(PlanStatus::Completed),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.plan_status, PlanStatus::Completed);
    assert_eq!(updated.plan_name, "Before");
    assert_eq!(updated.plan_start_datetime, plan.plan_start_datetime);
    assert_eq!(repo.count_by_status(PlanStatus::Completed).await?, 1);

    Ok(())
}
