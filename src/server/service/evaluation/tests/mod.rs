use entity::sea_orm_active_enums::PlanStatus;
use trainhub_test_utils::{
    constant::{TEST_ORACLE_API_KEY, TEST_ORACLE_MODEL},
    model::{CourseItemModel, PersonModel},
    prelude::*,
};

use crate::server::service::{evaluation::EvaluationService, scoring::oracle::ScoringOracle};

mod submit_grading;

/// Employee enrolled in a plan with one ended session of a teacher's course
struct Scenario {
    employee: PersonModel,
    teacher: PersonModel,
    item: CourseItemModel,
}

async fn scenario(test: &TestContext) -> Result<Scenario, TestError> {
    let employee = test.people().insert_employee("Emma").await?;
    let teacher = test.people().insert_teacher("Theo").await?;
    let planner = test.people().insert_planner("Paula").await?;
    let plan = test
        .training()
        .insert_plan(planner.person_id, "Onboarding", PlanStatus::InProgress)
        .await?;
    let course = test
        .training()
        .insert_course(teacher.person_id, "Rust Basics", "Technical")
        .await?;
    test.training().enroll(plan.plan_id, employee.person_id).await?;
    let item = test
        .training()
        .insert_item(
            plan.plan_id,
            course.course_id,
            factory::days_ago(1),
            factory::time(14, 0),
            factory::time(16, 0),
        )
        .await?;

    Ok(Scenario {
        employee,
        teacher,
        item,
    })
}

fn oracle(test: &TestContext) -> ScoringOracle {
    ScoringOracle::new(
        reqwest::Client::new(),
        test.oracle_url(),
        Some(TEST_ORACLE_API_KEY.to_string()),
        TEST_ORACLE_MODEL,
    )
}

fn service<'a>(test: &'a TestContext, oracle: &'a ScoringOracle) -> EvaluationService<'a> {
    EvaluationService::new(&test.db, oracle)
}
