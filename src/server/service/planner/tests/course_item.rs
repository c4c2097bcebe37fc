use crate::{
    model::planner::{CourseItemListQuery, CreateCourseItemDto, UpdateCourseItemDto},
    server::service::planner::course_item::CourseItemService,
};

use super::*;

fn create_payload(c: &Catalog, course_id: i32, begin: &str, end: &str) -> CreateCourseItemDto {
    CreateCourseItemDto {
        plan_id: c.plan.plan_id,
        course_id,
        class_date: "2024-01-15".to_string(),
        class_begin_time: begin.to_string(),
        class_end_time: end.to_string(),
        location: "Room 2".to_string(),
    }
}

/// Expect a session overlapping the teacher's existing one to be rejected with their name
#[tokio::test]
async fn rejects_teacher_double_booking() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let c = catalog(&test).await?;
    let other_course = test
        .training()
        .insert_course(c.teacher.person_id, "Databases", "Technical")
        .await?;
    let service = CourseItemService::new(&test.db);

    service
        .create(create_payload(&c, c.course.course_id, "15:00", "17:00"))
        .await?;
    let result = service
        .create(create_payload(&c, other_course.course_id, "14:00", "16:00"))
        .await;

    match result {
        Err(Error::RequestError(RequestError::ScheduleConflict { teacher_name })) => {
            assert_eq!(teacher_name, "Tom")
        }
        other => panic!("expected schedule conflict, got {:?}", other.err()),
    }

    let adjacent = service
        .create(create_payload(&c, other_course.course_id, "17:00", "18:00"))
        .await?;
    assert_eq!(adjacent.class_begin_time, factory::time(17, 0));

    Ok(())
}

/// Expect bad times, an inverted range and a missing plan to be rejected
#[tokio::test]
async fn validates_session_payload() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let c = catalog(&test).await?;
    let service = CourseItemService::new(&test.db);

    let inverted = service
        .create(create_payload(&c, c.course.course_id, "16:00", "14:00"))
        .await;
    assert!(matches!(
        inverted,
        Err(Error::RequestError(RequestError::Validation(_)))
    ));

    let malformed = service
        .create(create_payload(&c, c.course.course_id, "4pm", "17:00"))
        .await;
    assert!(matches!(
        malformed,
        Err(Error::RequestError(RequestError::Validation(_)))
    ));

    let mut missing_plan = create_payload(&c, c.course.course_id, "09:00", "10:00");
    missing_plan.plan_id = 9999;
    let result = service.create(missing_plan).await;
    assert!(matches!(
        result,
        Err(Error::RequestError(RequestError::NotFound(_)))
    ));

    Ok(())
}

/// Expect rescheduling to ignore the session itself but not the teacher's other sessions
#[tokio::test]
async fn update_rechecks_conflicts() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let c = catalog(&test).await?;
    let service = CourseItemService::new(&test.db);
    let morning = service
        .create(create_payload(&c, c.course.course_id, "09:00", "11:00"))
        .await?;
    service
        .create(create_payload(&c, c.course.course_id, "13:00", "15:00"))
        .await?;

    let shifted = service
        .update(
            morning.item_id,
            UpdateCourseItemDto {
                class_begin_time: Some("10:00".to_string()),
                class_end_time: Some("12:00".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(shifted.class_begin_time, factory::time(10, 0));
    assert_eq!(shifted.location, "Room 2");

    let clash = service
        .update(
            morning.item_id,
            UpdateCourseItemDto {
                class_end_time: Some("14:00".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        clash,
        Err(Error::RequestError(RequestError::ScheduleConflict { .. }))
    ));

    Ok(())
}

/// Expect moving a session to another teacher's course to check that teacher's calendar
#[tokio::test]
async fn update_checks_new_teacher() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let c = catalog(&test).await?;
    let busy = test.people().insert_teacher("Bea").await?;
    let busy_course = test
        .training()
        .insert_course(busy.person_id, "Design", "Soft Skills")
        .await?;
    let service = CourseItemService::new(&test.db);
    service
        .create(create_payload(&c, busy_course.course_id, "09:00", "11:00"))
        .await?;
    let item = service
        .create(create_payload(&c, c.course.course_id, "10:00", "12:00"))
        .await?;

    let result = service
        .update(
            item.item_id,
            UpdateCourseItemDto {
                course_id: Some(busy_course.course_id),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(Error::RequestError(RequestError::ScheduleConflict { teacher_name })) => {
            assert_eq!(teacher_name, "Bea")
        }
        other => panic!("expected schedule conflict, got {:?}", other.err()),
    }

    Ok(())
}

/// Expect evaluated sessions to need force, and listings to join plan and teacher
#[tokio::test]
async fn delete_guards_evaluations() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let c = catalog(&test).await?;
    let service = CourseItemService::new(&test.db);
    let item = service
        .create(create_payload(&c, c.course.course_id, "09:00", "10:00"))
        .await?;
    test.training()
        .insert_evaluation(c.employee.person_id, item.item_id, Some(66.0), None, 0.5)
        .await?;

    let page = service
        .list(CourseItemListQuery {
            plan_id: Some(c.plan.plan_id),
            ..Default::default()
        })
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].plan_name, "Onboarding");
    assert_eq!(page.list[0].teacher_name, "Tom");

    let data = blocked_data(service.delete(item.item_id, false).await);
    assert_eq!(data["evaluationCount"], 1);

    service.delete(item.item_id, true).await?;
    let page = service.list(CourseItemListQuery::default()).await?;
    assert_eq!(page.total, 0);

    Ok(())
}
