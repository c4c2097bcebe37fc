use chrono::Utc;
use entity::{attendance_evaluation::Model as Evaluation, sea_orm_active_enums::PlanStatus};
use trainhub_test_utils::prelude::*;

use super::{overview::StatisticsService, *};

fn evaluation(self_score: Option<f64>, teacher_score: Option<f64>, ratio: f64) -> Evaluation {
    let now = Utc::now().naive_utc();

    Evaluation {
        person_id: 1,
        item_id: 1,
        self_score,
        self_comment: String::new(),
        teacher_score,
        teacher_comment: String::new(),
        score_ratio: ratio,
        created_at: now,
        updated_at: now,
    }
}

/// Expect personal views to use the self score until graded
#[test]
fn personal_score_prefers_weighted() {
    assert_eq!(personal_score(&evaluation(Some(77.5), None, 0.5)), Some(77.5));
    assert_eq!(
        personal_score(&evaluation(Some(77.5), Some(90.0), 0.5)),
        Some(83.75)
    );
    assert_eq!(personal_score(&evaluation(None, None, 0.5)), None);
    assert_eq!(graded_score(&evaluation(Some(77.5), None, 0.5)), None);
}

/// Expect an empty set of scores to summarize to zeros
#[test]
fn empty_summary_is_zero() {
    let summary = ScoreSummary::from_scores(Vec::new());

    assert_eq!(summary, ScoreSummary::default());
    assert_eq!(percentage(3, 0), 0.0);
}

#[test]
fn summary_tracks_extremes() {
    let summary = ScoreSummary::from_scores([70.0, 90.0, 80.0]);

    assert_eq!(summary.count, 3);
    assert_eq!(summary.average, 80.0);
    assert_eq!(summary.max, 90.0);
    assert_eq!(summary.min, 70.0);
}

/// Expect bucket edges to fall into the higher bucket
#[test]
fn distribution_buckets() {
    let buckets = distribution(&[59.9, 60.0, 69.9, 70.0, 85.0, 90.0, 100.0]);

    assert_eq!(buckets.below_60, 1);
    assert_eq!(buckets.from_60, 2);
    assert_eq!(buckets.from_70, 1);
    assert_eq!(buckets.from_80, 1);
    assert_eq!(buckets.from_90, 2);
}

#[test]
fn trend_compares_last_two() {
    assert_eq!(trend(&[]), "stable");
    assert_eq!(trend(&[80.0]), "stable");
    assert_eq!(trend(&[90.0, 70.0, 80.0]), "up");
    assert_eq!(trend(&[70.0, 80.0, 75.0]), "down");
    assert_eq!(trend(&[80.0, 80.0]), "stable");
}

/// Expect every overview to be zero for people with no data
#[tokio::test]
async fn overviews_are_zero_without_data() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
    let employee = test.people().insert_employee("Emma").await?;
    let teacher = test.people().insert_teacher("Theo").await?;
    let planner = test.people().insert_planner("Paula").await?;
    let service = StatisticsService::new(&test.db);
    let today = factory::days_ago(0);

    let employee_overview = service.employee_overview(employee.person_id, today).await?;
    let teacher_overview = service.teacher_overview(teacher.person_id, today).await?;
    let planner_overview = service.planner_overview(planner.person_id).await?;
    let global = service.global().await?;

    assert_eq!(employee_overview, Default::default());
    assert_eq!(teacher_overview, Default::default());
    assert_eq!(planner_overview.plan_count, 0);
    assert_eq!(planner_overview.average_plan_score, 0.0);
    assert_eq!(global.average_satisfaction, 0);
    assert_eq!(global.teacher_count, 1);
    assert_eq!(global.total_student_count, 1);

    Ok(())
}

/// Expect completed and graded sessions to be counted separately
#[tokio::test]
async fn employee_overview_counts_completed_sessions() -> Result<(), TestError> {
    let test = test_setup_with_training_tables!()?;
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

    let mut items = Vec::new();
    for days in [3, 2, 1] {
        let item = test
            .training()
            .insert_item(
                plan.plan_id,
                course.course_id,
                factory::days_ago(days),
                factory::time(9, 0),
                factory::time(11, 0),
            )
            .await?;
        items.push(item);
    }
    test.training()
        .insert_evaluation(employee.person_id, items[0].item_id, Some(77.5), Some(90.0), 0.5)
        .await?;
    test.training()
        .insert_evaluation(employee.person_id, items[1].item_id, Some(70.0), None, 0.5)
        .await?;

    let service = StatisticsService::new(&test.db);
    let overview = service
        .employee_overview(employee.person_id, factory::days_ago(0))
        .await?;
    let teacher_overview = service
        .teacher_overview(teacher.person_id, factory::days_ago(0))
        .await?;
    let global = service.global().await?;

    assert_eq!(overview.plan_count, 1);
    assert_eq!(overview.session_count, 3);
    assert_eq!(overview.completed_count, 2);
    // (83.75 + 70) / 2
    assert_eq!(overview.average_score, 76.88);
    assert_eq!(teacher_overview.class_count, 3);
    assert_eq!(teacher_overview.student_count, 1);
    assert_eq!(teacher_overview.average_teaching_score, 90.0);
    assert_eq!(global.average_satisfaction, 83);

    Ok(())
}

/// Expect personal statistics only for employee and teacher callers
#[tokio::test]
async fn home_adds_personal_stats_by_role() -> Result<(), TestError> {
    use entity::sea_orm_active_enums::Role;

    use crate::{model::home::PersonalStatsDto, server::model::session::CurrentUser};

    let test = test_setup_with_training_tables!()?;
    let employee = test.people().insert_employee("Emma").await?;
    let teacher = test.people().insert_teacher("Theo").await?;
    let planner = test.people().insert_planner("Paula").await?;
    let service = StatisticsService::new(&test.db);
    let caller = |p: &trainhub_test_utils::model::PersonModel, role| {
        Some(CurrentUser {
            person_id: p.person_id,
            role,
        })
    };

    let anonymous = service.home(None).await?;
    let as_employee = service.home(caller(&employee, Role::Employee)).await?;
    let as_teacher = service.home(caller(&teacher, Role::Teacher)).await?;
    let as_planner = service.home(caller(&planner, Role::Planner)).await?;

    assert!(anonymous.personal_stats.is_none());
    assert!(matches!(
        as_employee.personal_stats,
        Some(PersonalStatsDto::Employee(_))
    ));
    assert!(matches!(
        as_teacher.personal_stats,
        Some(PersonalStatsDto::Teacher(_))
    ));
    assert!(as_planner.personal_stats.is_none());
    assert_eq!(as_planner.teacher_count, 1);

    Ok(())
}
