use axum::http::StatusCode;
use serde_json::json;
use trainhub_test_utils::prelude::*;

use crate::TestApp;

/// Expect plan, course and session creation, a double booking rejection and a guarded delete
#[tokio::test]
async fn schedules_sessions_without_double_booking() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (_, planner) = app.sign_up("paula", "Paula", "planner").await;
    let (teacher_id, _) = app.sign_up("tom", "Tom", "teacher").await;
    let planner = Some(planner.as_str());

    let (status, plan) = app
        .post(
            "/api/planner/plans",
            planner,
            json!({
                "planName": "Onboarding",
                "planStatus": "planning",
                "planStartDatetime": "2024-01-01 09:00:00",
                "planEndDatetime": "2024-03-01 18:00:00",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", plan);
    let plan_id = plan["data"]["planId"].as_i64().unwrap();

    let (status, course) = app
        .post(
            "/api/planner/courses",
            planner,
            json!({
                "courseName": "Rust Basics",
                "courseClass": "Technical",
                "teacherId": teacher_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", course);
    let course_id = course["data"]["courseId"].as_i64().unwrap();

    let session = |begin: &str, end: &str| {
        json!({
            "planId": plan_id,
            "courseId": course_id,
            "classDate": "2024-01-15",
            "classBeginTime": begin,
            "classEndTime": end,
            "location": "Room 101",
        })
    };

    let (status, _) = app
        .post("/api/planner/course-items", planner, session("15:00", "17:00"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post("/api/planner/course-items", planner, session("14:00", "16:00"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Tom"));

    let (status, body) = app
        .delete(&format!("/api/planner/plans/{}", plan_id), planner)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["courseItemCount"], 1);

    let (status, _) = app
        .delete(&format!("/api/planner/plans/{}?force=true", plan_id), planner)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .get(&format!("/api/planner/plans/{}", plan_id), planner)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect enrollment through the API to show up in the plan listing counts
#[tokio::test]
async fn enrolls_employees() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (_, planner) = app.sign_up("paula", "Paula", "planner").await;
    let (employee_id, _) = app.sign_up("emma", "Emma", "employee").await;
    let (teacher_id, _) = app.sign_up("tom", "Tom", "teacher").await;
    let planner = Some(planner.as_str());

    let (_, plan) = app
        .post(
            "/api/planner/plans",
            planner,
            json!({
                "planName": "Onboarding",
                "planStatus": "in-progress",
                "planStartDatetime": "2024-01-01 09:00:00",
                "planEndDatetime": "2024-03-01 18:00:00",
            }),
        )
        .await;
    let plan_id = plan["data"]["planId"].as_i64().unwrap();

    let (status, body) = app
        .post(
            &format!("/api/planner/plans/{}/employees", plan_id),
            planner,
            json!({ "employeeIds": [employee_id, employee_id] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["addedCount"], 1);

    let (status, _) = app
        .post(
            &format!("/api/planner/plans/{}/employees", plan_id),
            planner,
            json!({ "employeeIds": [teacher_id] }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .get("/api/planner/plans?status=in-progress&pageSize=5", planner)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["pageSize"], 5);
    assert_eq!(body["data"]["list"][0]["employeeCount"], 1);

    let (status, body) = app.get("/api/planner/employees", planner).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 1);

    Ok(())
}

/// Expect unparsable query and path parameters to answer 400 in the envelope
#[tokio::test]
async fn rejects_unparsable_parameters() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (_, planner) = app.sign_up("paula", "Paula", "planner").await;

    let (status, body) = app.get("/api/planner/plans?page=abc", Some(&planner)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = app.get("/api/planner/plans/abc", Some(&planner)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/planner/analytics", Some(&planner)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["courseRankings"].as_array().unwrap().is_empty());

    Ok(())
}
