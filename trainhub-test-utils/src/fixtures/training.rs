use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use entity::sea_orm_active_enums::PlanStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CourseItemModel, CourseModel, EvaluationModel, PlanModel},
    TestContext,
};

impl TestContext {
    pub fn training<'a>(&'a self) -> TrainingFixtures<'a> {
        TrainingFixtures { setup: self }
    }
}

pub struct TrainingFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TrainingFixtures<'a> {
    /// Insert a plan spanning the next 30 days.
    pub async fn insert_plan(
        &self,
        creator_id: i32,
        name: &str,
        status: PlanStatus,
    ) -> Result<PlanModel, TestError> {
        let start = Utc::now().naive_utc();

        Ok(
            entity::prelude::TrainingPlan::insert(entity::training_plan::ActiveModel {
                plan_name: ActiveValue::Set(name.to_string()),
                plan_status: ActiveValue::Set(status),
                plan_start_datetime: ActiveValue::Set(start),
                plan_end_datetime: ActiveValue::Set(start + Duration::days(30)),
                creator_id: ActiveValue::Set(creator_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_course(
        &self,
        teacher_id: i32,
        name: &str,
        class: &str,
    ) -> Result<CourseModel, TestError> {
        Ok(
            entity::prelude::Course::insert(entity::course::ActiveModel {
                course_name: ActiveValue::Set(name.to_string()),
                course_desc: ActiveValue::Set(format!("{} description", name)),
                course_require: ActiveValue::Set(String::new()),
                course_class: ActiveValue::Set(class.to_string()),
                teacher_id: ActiveValue::Set(teacher_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_item(
        &self,
        plan_id: i32,
        course_id: i32,
        date: NaiveDate,
        begin: NaiveTime,
        end: NaiveTime,
    ) -> Result<CourseItemModel, TestError> {
        Ok(
            entity::prelude::PlanCourseItem::insert(entity::plan_course_item::ActiveModel {
                plan_id: ActiveValue::Set(plan_id),
                course_id: ActiveValue::Set(course_id),
                class_date: ActiveValue::Set(date),
                class_begin_time: ActiveValue::Set(begin),
                class_end_time: ActiveValue::Set(end),
                location: ActiveValue::Set("Room 101".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn enroll(&self, plan_id: i32, person_id: i32) -> Result<(), TestError> {
        entity::prelude::PlanEmployee::insert(entity::plan_employee::ActiveModel {
            plan_id: ActiveValue::Set(plan_id),
            person_id: ActiveValue::Set(person_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Insert an evaluation row; `teacher_score` of `None` leaves it ungraded.
    pub async fn insert_evaluation(
        &self,
        person_id: i32,
        item_id: i32,
        self_score: Option<f64>,
        teacher_score: Option<f64>,
        score_ratio: f64,
    ) -> Result<EvaluationModel, TestError> {
        let now = Utc::now().naive_utc();

        entity::prelude::AttendanceEvaluation::insert(entity::attendance_evaluation::ActiveModel {
            person_id: ActiveValue::Set(person_id),
            item_id: ActiveValue::Set(item_id),
            self_score: ActiveValue::Set(self_score),
            self_comment: ActiveValue::Set(String::new()),
            teacher_score: ActiveValue::Set(teacher_score),
            teacher_comment: ActiveValue::Set(String::new()),
            score_ratio: ActiveValue::Set(score_ratio),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(EvaluationModel {
            person_id,
            item_id,
            self_score,
            self_comment: String::new(),
            teacher_score,
            teacher_comment: String::new(),
            score_ratio,
            created_at: now,
            updated_at: now,
        })
    }
}
