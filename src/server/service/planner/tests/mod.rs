use entity::sea_orm_active_enums::PlanStatus;
use trainhub_test_utils::{
    model::{CourseModel, PersonModel, PlanModel},
    prelude::*,
};

use crate::server::error::{request::RequestError, Error};

mod course_item;

/// A planner's plan with one enrolled employee and one course of a teacher
struct Catalog {
    planner: PersonModel,
    teacher: PersonModel,
    employee: PersonModel,
    plan: PlanModel,
    course: CourseModel,
}

async fn catalog(test: &TestContext) -> Result<Catalog, TestError> {
    let planner = test.people().insert_planner("Paula").await?;
    let teacher = test.people().insert_teacher("Tom").await?;
    let employee = test.people().insert_employee("Emma").await?;
    let plan = test
        .training()
        .insert_plan(planner.person_id, "Onboarding", PlanStatus::InProgress)
        .await?;
    let course = test
        .training()
        .insert_course(teacher.person_id, "Rust Basics", "Technical")
        .await?;
    test.training()
        .enroll(plan.plan_id, employee.person_id)
        .await?;

    Ok(Catalog {
        planner,
        teacher,
        employee,
        plan,
        course,
    })
}

/// Dependent counts carried by a blocked delete
fn blocked_data(result: Result<(), Error>) -> serde_json::Value {
    match result {
        Err(Error::RequestError(RequestError::BlockedByDependents { data, .. })) => data,
        other => panic!("expected blocked delete, got {:?}", other),
    }
}
