use super::*;
use entity::sea_orm_active_enums::PlanStatus;

use crate::server::data::plan_employee::PlanEmployeeRepository;

/// Expect enrollment to be visible from both the plan and the employee side
#[tokio::test]
async fn enroll_and_query_both_sides() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let planner = test.people().insert_planner("Paula").await?;
    let employee = test.people().insert_employee("Emma").await?;
    let plan = test
        .training()
        .insert_plan(planner.person_id, "Plan", PlanStatus::Planning)
        .await?;
    let repo = PlanEmployeeRepository::new(&test.db);

    repo.enroll(plan.plan_id, employee.person_id).await?;

    assert!(repo.is_enrolled(plan.plan_id, employee.person_id).await?);
    assert_eq!(repo.find_person_ids(plan.plan_id).await?, vec![employee.person_id]);
    assert_eq!(repo.find_plan_ids(employee.person_id).await?, vec![plan.plan_id]);
    assert_eq!(repo.count_by_plan(plan.plan_id).await?, 1);

    Ok(())
}

/// Expect removal to report affected rows and clear the membership
#[tokio::test]
async fn remove_membership() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let planner = test.people().insert_planner("Paula").await?;
    let employee = test.people().insert_employee("Emma").await?;
    let plan = test
        .training()
        .insert_plan(planner.person_id, "Plan", PlanStatus::Planning)
        .await?;
    test.training().enroll(plan.plan_id, employee.person_id).await?;
    let repo = PlanEmployeeRepository::new(&test.db);

    assert_eq!(repo.remove(plan.plan_id, employee.person_id).await?, 1);
    assert_eq!(repo.remove(plan.plan_id, employee.person_id).await?, 0);
    assert!(!repo.is_enrolled(plan.plan_id, employee.person_id).await?);

    Ok(())
}
