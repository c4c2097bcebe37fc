use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveValue, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::{
        api::PageDto,
        planner::{
            CourseItemDto, CourseItemListQuery, CourseItemSummaryDto, CreateCourseItemDto,
            UpdateCourseItemDto,
        },
    },
    server::{
        data::{
            course::CourseRepository,
            course_item::{CourseItemRepository, ItemFilter, NewCourseItem},
            evaluation::EvaluationRepository,
            training_plan::TrainingPlanRepository,
        },
        error::{request::RequestError, Error},
        service::{planner::course::course_not_found, schedule::ConflictChecker},
        util::{
            time::{parse_date, parse_optional_date, parse_time},
            validate,
        },
    },
};

pub static MAX_LOCATION_LENGTH: usize = 100;

pub struct CourseItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseItemService<'a> {
    /// Creates a new instance of [`CourseItemService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of scheduled sessions joined with plan, course and teacher
    pub async fn list(
        &self,
        query: CourseItemListQuery,
    ) -> Result<PageDto<CourseItemSummaryDto>, Error> {
        let (page, page_size) = validate::pagination(query.page, query.page_size)?;

        let filter = ItemFilter {
            plan_ids: query.plan_id.map(|id| vec![id]),
            course_ids: query.course_id.map(|id| vec![id]),
            from: parse_optional_date("startDate", query.start_date.as_deref())?,
            to: parse_optional_date("endDate", query.end_date.as_deref())?,
            descending: validate::descending(query.sort_order.as_deref(), false)?,
        };

        let item_repository = CourseItemRepository::new(self.db);
        let (items, total) = item_repository.find_page(filter, page, page_size).await?;

        let list = item_repository
            .load_sessions(items)
            .await?
            .into_iter()
            .map(|s| CourseItemSummaryDto {
                item_id: s.item.item_id,
                plan_id: s.plan.plan_id,
                plan_name: s.plan.plan_name,
                course_id: s.course.course_id,
                course_name: s.course.course_name,
                course_class: s.course.course_class,
                teacher_id: s.course.teacher_id,
                teacher_name: s.teacher_name,
                class_date: s.item.class_date,
                class_begin_time: s.item.class_begin_time,
                class_end_time: s.item.class_end_time,
                location: s.item.location,
            })
            .collect();

        Ok(PageDto {
            total,
            page,
            page_size,
            list,
        })
    }

    /// Schedules a session of a course within a plan
    ///
    /// Runs in one transaction that locks the course's teacher, so the conflict check
    /// and the insert cannot interleave with another scheduling of the same teacher.
    ///
    /// # Returns
    /// - `Ok(CourseItemDto)` - The stored session
    /// - `Err(RequestError::Validation)` - Bad date, times or location
    /// - `Err(RequestError::NotFound)` - Plan or course does not exist
    /// - `Err(RequestError::ScheduleConflict)` - The teacher is already busy at that time
    pub async fn create(&self, payload: CreateCourseItemDto) -> Result<CourseItemDto, Error> {
        let slot = Slot::parse(
            &payload.class_date,
            &payload.class_begin_time,
            &payload.class_end_time,
        )?;
        let location = validate::text("location", &payload.location, 1, MAX_LOCATION_LENGTH)?;

        let txn = self.db.begin().await?;

        let plan = TrainingPlanRepository::new(&txn)
            .find_by_id(payload.plan_id)
            .await?
            .ok_or_else(|| {
                RequestError::NotFound(format!("Training plan {} not found", payload.plan_id))
            })?;
        let course = CourseRepository::new(&txn)
            .find_by_id(payload.course_id)
            .await?
            .ok_or_else(|| course_not_found(payload.course_id))?;

        ConflictChecker::new(&txn)
            .ensure_available(course.teacher_id, slot.date, slot.begin, slot.end, None)
            .await?;

        let item = CourseItemRepository::new(&txn)
            .create(NewCourseItem {
                plan_id: plan.plan_id,
                course_id: course.course_id,
                class_date: slot.date,
                class_begin_time: slot.begin,
                class_end_time: slot.end,
                location,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Scheduled item ID {} of course ID {} in plan ID {} on {} {}-{}",
            item.item_id,
            course.course_id,
            plan.plan_id,
            item.class_date,
            item.class_begin_time,
            item.class_end_time
        );

        Ok(item_dto(item, plan.plan_name, course.course_name))
    }

    /// Reschedules a session, applying the fields present in `payload`
    ///
    /// The conflict check re-runs against the resulting slot and teacher, ignoring the
    /// session itself. Changing the course may change the teacher.
    pub async fn update(
        &self,
        item_id: i32,
        payload: UpdateCourseItemDto,
    ) -> Result<CourseItemDto, Error> {
        if payload.course_id.is_none()
            && payload.class_date.is_none()
            && payload.class_begin_time.is_none()
            && payload.class_end_time.is_none()
            && payload.location.is_none()
        {
            return Err(RequestError::Validation("No fields to update".to_string()).into());
        }

        let date = payload
            .class_date
            .as_deref()
            .map(|v| parse_date("classDate", v))
            .transpose()?;
        let begin = payload
            .class_begin_time
            .as_deref()
            .map(|v| parse_time("classBeginTime", v))
            .transpose()?;
        let end = payload
            .class_end_time
            .as_deref()
            .map(|v| parse_time("classEndTime", v))
            .transpose()?;
        let location = payload
            .location
            .as_deref()
            .map(|v| validate::text("location", v, 1, MAX_LOCATION_LENGTH))
            .transpose()?;

        let txn = self.db.begin().await?;

        let item_repository = CourseItemRepository::new(&txn);
        let item = item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| item_not_found(item_id))?;

        let course = CourseRepository::new(&txn)
            .find_by_id(payload.course_id.unwrap_or(item.course_id))
            .await?
            .ok_or_else(|| course_not_found(payload.course_id.unwrap_or(item.course_id)))?;

        let slot = Slot::new(
            date.unwrap_or(item.class_date),
            begin.unwrap_or(item.class_begin_time),
            end.unwrap_or(item.class_end_time),
        )?;

        ConflictChecker::new(&txn)
            .ensure_available(
                course.teacher_id,
                slot.date,
                slot.begin,
                slot.end,
                Some(item_id),
            )
            .await?;

        let plan_name = TrainingPlanRepository::new(&txn)
            .find_by_id(item.plan_id)
            .await?
            .map(|p| p.plan_name)
            .unwrap_or_default();

        let mut active: entity::plan_course_item::ActiveModel = item.into();
        active.course_id = ActiveValue::Set(course.course_id);
        active.class_date = ActiveValue::Set(slot.date);
        active.class_begin_time = ActiveValue::Set(slot.begin);
        active.class_end_time = ActiveValue::Set(slot.end);
        if let Some(location) = location {
            active.location = ActiveValue::Set(location);
        }

        let item = item_repository.update(active).await?;

        txn.commit().await?;

        tracing::info!("Updated course item ID {}", item.item_id);

        Ok(item_dto(item, plan_name, course.course_name))
    }

    /// Deletes a session, refusing while evaluations exist unless `force` is set
    ///
    /// # Returns
    /// - `Ok(())` - Session deleted
    /// - `Err(RequestError::NotFound)` - Session does not exist
    /// - `Err(RequestError::BlockedByDependents)` - Evaluations exist, carrying `evaluationCount`
    pub async fn delete(&self, item_id: i32, force: bool) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let item_repository = CourseItemRepository::new(&txn);
        if item_repository.find_by_id(item_id).await?.is_none() {
            return Err(item_not_found(item_id).into());
        }

        let evaluation_repository = EvaluationRepository::new(&txn);
        let evaluation_count = evaluation_repository.count_by_item(item_id).await?;
        if evaluation_count > 0 {
            if !force {
                return Err(RequestError::BlockedByDependents {
                    message: format!(
                        "Session has {} evaluations, pass force=true to delete them too",
                        evaluation_count
                    ),
                    data: json!({ "evaluationCount": evaluation_count }),
                }
                .into());
            }

            evaluation_repository.delete_by_items(&[item_id]).await?;
        }

        item_repository.delete(item_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted course item ID {} ({} evaluations deleted)",
            item_id,
            evaluation_count
        );

        Ok(())
    }
}

/// A validated class date with a non-empty time range
struct Slot {
    date: NaiveDate,
    begin: NaiveTime,
    end: NaiveTime,
}

impl Slot {
    fn new(date: NaiveDate, begin: NaiveTime, end: NaiveTime) -> Result<Self, RequestError> {
        if begin >= end {
            return Err(RequestError::Validation(
                "classBeginTime must be before classEndTime".to_string(),
            ));
        }

        Ok(Self { date, begin, end })
    }

    fn parse(date: &str, begin: &str, end: &str) -> Result<Self, RequestError> {
        Self::new(
            parse_date("classDate", date)?,
            parse_time("classBeginTime", begin)?,
            parse_time("classEndTime", end)?,
        )
    }
}

fn item_not_found(item_id: i32) -> RequestError {
    RequestError::NotFound(format!("Course session {} not found", item_id))
}

fn item_dto(
    item: entity::plan_course_item::Model,
    plan_name: String,
    course_name: String,
) -> CourseItemDto {
    CourseItemDto {
        item_id: item.item_id,
        plan_id: item.plan_id,
        plan_name,
        course_id: item.course_id,
        course_name,
        class_date: item.class_date,
        class_begin_time: item.class_begin_time,
        class_end_time: item.class_end_time,
        location: item.location,
    }
}
