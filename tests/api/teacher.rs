use axum::http::StatusCode;
use entity::sea_orm_active_enums::PlanStatus;
use serde_json::json;
use trainhub_test_utils::prelude::*;

use crate::TestApp;

struct Graded {
    item_id: i32,
    course_id: i32,
    employee_id: i32,
}

/// Course of the given teacher with one ended session and a self-evaluated employee
async fn self_evaluated(app: &TestApp, teacher_id: i32) -> Result<Graded, TestError> {
    let employee = app.test.people().insert_employee("Emma").await?;
    let planner = app.test.people().insert_planner("Paula").await?;
    let plan = app
        .test
        .training()
        .insert_plan(planner.person_id, "Onboarding", PlanStatus::InProgress)
        .await?;
    let course = app
        .test
        .training()
        .insert_course(teacher_id, "Rust Basics", "Technical")
        .await?;
    app.test
        .training()
        .enroll(plan.plan_id, employee.person_id)
        .await?;
    let item = app
        .test
        .training()
        .insert_item(
            plan.plan_id,
            course.course_id,
            factory::days_ago(2),
            factory::time(9, 0),
            factory::time(11, 0),
        )
        .await?;
    app.test
        .training()
        .insert_evaluation(employee.person_id, item.item_id, Some(70.0), None, 0.5)
        .await?;

    Ok(Graded {
        item_id: item.item_id,
        course_id: course.course_id,
        employee_id: employee.person_id,
    })
}

/// Expect grading to compute the weighted score and clear the pending list
#[tokio::test]
async fn grades_self_evaluation() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (teacher_id, token) = app.sign_up("theo", "Theo", "teacher").await;
    let g = self_evaluated(&app, teacher_id).await?;
    let token = Some(token.as_str());

    let (status, body) = app.get("/api/teacher/pending-evaluations", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pendingCount"], 1);

    let (status, body) = app
        .post(
            "/api/teacher/submit-grading",
            token,
            json!({
                "itemId": g.item_id,
                "personId": g.employee_id,
                "teacherScore": 90,
                "teacherComment": "Solid work",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["message"], "Grading submitted");
    assert_eq!(body["data"]["weightedScore"], 80.0);

    let (status, body) = app.get("/api/teacher/pending-evaluations", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pendingCount"], 0);

    let (status, body) = app
        .get(
            &format!("/api/teacher/course-statistics?courseId={}", g.course_id),
            token,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["teacherName"], "Theo");

    Ok(())
}

/// Expect another teacher's course to be off limits
#[tokio::test]
async fn refuses_foreign_course() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (teacher_id, _) = app.sign_up("theo", "Theo", "teacher").await;
    let (_, other) = app.sign_up("tina", "Tina", "teacher").await;
    let g = self_evaluated(&app, teacher_id).await?;
    let other = Some(other.as_str());

    let (status, _) = app
        .post(
            "/api/teacher/submit-grading",
            other,
            json!({ "itemId": g.item_id, "personId": g.employee_id, "teacherScore": 90 }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .get(
            &format!("/api/teacher/course-statistics?courseId={}", g.course_id),
            other,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}
