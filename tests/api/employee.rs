use axum::http::StatusCode;
use entity::sea_orm_active_enums::PlanStatus;
use serde_json::{json, Value};
use trainhub_test_utils::prelude::*;

use crate::TestApp;

/// Enrolls the employee in a plan with one session that ended yesterday
///
/// Returns the session's item ID.
async fn ended_session(app: &TestApp, employee_id: i32) -> Result<i32, TestError> {
    let teacher = app.test.people().insert_teacher("Theo").await?;
    let planner = app.test.people().insert_planner("Paula").await?;
    let plan = app
        .test
        .training()
        .insert_plan(planner.person_id, "Onboarding", PlanStatus::InProgress)
        .await?;
    let course = app
        .test
        .training()
        .insert_course(teacher.person_id, "Rust Basics", "Technical")
        .await?;
    app.test.training().enroll(plan.plan_id, employee_id).await?;
    let item = app
        .test
        .training()
        .insert_item(
            plan.plan_id,
            course.course_id,
            factory::days_ago(1),
            factory::time(14, 0),
            factory::time(16, 0),
        )
        .await?;

    Ok(item.item_id)
}

fn evaluation(item_id: i32) -> Value {
    json!({
        "itemId": item_id,
        "selfComment": "Good",
        "understanding": 4,
        "difficulty": 3,
        "satisfaction": 5,
    })
}

/// Expect the fallback score when the oracle is disabled, then the session in the score summary
#[tokio::test]
async fn submits_with_fallback_score() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (employee_id, token) = app.sign_up("emma", "Emma", "employee").await;
    let item_id = ended_session(&app, employee_id).await?;
    let token = Some(token.as_str());

    let (status, body) = app
        .post("/api/employee/submit-evaluation", token, evaluation(item_id))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["message"], "Evaluation submitted");
    assert_eq!(body["data"]["scoreSource"], "fallback");
    assert_eq!(body["data"]["selfScore"], 65.0);
    assert!(body["data"]["weightedScore"].is_null());

    let (status, body) = app.get("/api/employee/scores", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["statistics"]["totalCourses"], 1);
    assert_eq!(body["data"]["statistics"]["completedCourses"], 1);
    assert_eq!(body["data"]["statistics"]["pendingEvaluation"], 0);

    let (status, body) = app.get("/api/employee/pending-evaluations", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pendingCount"], 0);

    Ok(())
}

/// Expect the oracle's score to be stored and reported as its source
#[tokio::test]
async fn submits_with_oracle_score() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .with_oracle_endpoint("91", 1)
        .build()
        .await?;
    let app = TestApp::with_mock_oracle(test);
    let (employee_id, token) = app.sign_up("emma", "Emma", "employee").await;
    let item_id = ended_session(&app, employee_id).await?;

    let (status, body) = app
        .post("/api/employee/submit-evaluation", Some(&token), evaluation(item_id))
        .await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["scoreSource"], "oracle");
    assert_eq!(body["data"]["selfScore"], 91.0);
    app.test.assert_mocks();

    Ok(())
}

/// Expect employees outside the session's plan to be refused
#[tokio::test]
async fn refuses_sessions_outside_enrollment() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (employee_id, _) = app.sign_up("emma", "Emma", "employee").await;
    let (_, outsider) = app.sign_up("omar", "Omar", "employee").await;
    let item_id = ended_session(&app, employee_id).await?;

    let (status, body) = app
        .post("/api/employee/submit-evaluation", Some(&outsider), evaluation(item_id))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 403);

    Ok(())
}
