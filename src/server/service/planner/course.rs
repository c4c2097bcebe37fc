use entity::sea_orm_active_enums::Role;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::{
        api::PageDto,
        planner::{CourseDto, CourseListQuery, CourseSummaryDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        data::{
            course::{CourseChanges, CourseFilter, CourseRepository, NewCourse},
            course_item::{unique, CourseItemRepository, ItemFilter},
            person::PersonRepository,
        },
        error::{request::RequestError, Error},
        service::{planner::person_names, schedule::ConflictChecker},
        util::validate,
    },
};

pub static MAX_COURSE_NAME_LENGTH: usize = 50;
pub static MAX_COURSE_DESC_LENGTH: usize = 100;
pub static MAX_COURSE_REQUIRE_LENGTH: usize = 500;
pub static MAX_COURSE_CLASS_LENGTH: usize = 20;

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    /// Creates a new instance of [`CourseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of the catalogue, newest first, with teacher names and session counts
    pub async fn list(&self, query: CourseListQuery) -> Result<PageDto<CourseSummaryDto>, Error> {
        let (page, page_size) = validate::pagination(query.page, query.page_size)?;

        let filter = CourseFilter {
            course_class: query
                .course_class
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            keyword: query
                .keyword
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            teacher_id: query.teacher_id,
        };

        let (courses, total) = CourseRepository::new(self.db)
            .find_page(filter, page, page_size)
            .await?;

        let teacher_ids = unique(courses.iter().map(|c| c.teacher_id));
        let teachers = person_names(self.db, &teacher_ids).await?;
        let item_repository = CourseItemRepository::new(self.db);

        let mut list = Vec::with_capacity(courses.len());
        for course in courses {
            let scheduled_count = item_repository.count_by_course(course.course_id).await?;

            list.push(CourseSummaryDto {
                course_id: course.course_id,
                teacher_name: teachers.get(&course.teacher_id).cloned().unwrap_or_default(),
                course_name: course.course_name,
                course_desc: course.course_desc,
                course_require: course.course_require,
                course_class: course.course_class,
                teacher_id: course.teacher_id,
                scheduled_count,
            });
        }

        Ok(PageDto {
            total,
            page,
            page_size,
            list,
        })
    }

    /// Adds a course to the catalogue
    ///
    /// # Returns
    /// - `Ok(CourseDto)` - The stored course
    /// - `Err(RequestError::Validation)` - A field exceeds its length limit, or `teacherId`
    ///   is not a teacher
    pub async fn create(&self, payload: CreateCourseDto) -> Result<CourseDto, Error> {
        let course = NewCourse {
            course_name: validate::text("courseName", &payload.course_name, 1, MAX_COURSE_NAME_LENGTH)?,
            course_desc: validate::text("courseDesc", &payload.course_desc, 0, MAX_COURSE_DESC_LENGTH)?,
            course_require: validate::text(
                "courseRequire",
                &payload.course_require,
                0,
                MAX_COURSE_REQUIRE_LENGTH,
            )?,
            course_class: validate::text("courseClass", &payload.course_class, 1, MAX_COURSE_CLASS_LENGTH)?,
            teacher_id: payload.teacher_id,
        };

        let teacher = find_teacher(self.db, course.teacher_id).await?;
        let course = CourseRepository::new(self.db).create(course).await?;

        tracing::info!(
            "Created course ID {} ({}) taught by person ID {}",
            course.course_id,
            course.course_name,
            teacher.person_id
        );

        Ok(course_dto(course, teacher.name))
    }

    /// Applies the fields present in `payload`
    ///
    /// # Returns
    /// - `Ok(CourseDto)` - The updated course
    /// - `Err(RequestError::Validation)` - Empty payload, a field too long, or `teacherId`
    ///   is not a teacher
    /// - `Err(RequestError::NotFound)` - Course does not exist
    /// - `Err(RequestError::ScheduleConflict)` - A new teacher is already busy during one
    ///   of the course's sessions
    pub async fn update(&self, course_id: i32, payload: UpdateCourseDto) -> Result<CourseDto, Error> {
        if payload.course_name.is_none()
            && payload.course_desc.is_none()
            && payload.course_require.is_none()
            && payload.course_class.is_none()
            && payload.teacher_id.is_none()
        {
            return Err(RequestError::Validation("No fields to update".to_string()).into());
        }

        let changes = CourseChanges {
            course_name: payload
                .course_name
                .as_deref()
                .map(|v| validate::text("courseName", v, 1, MAX_COURSE_NAME_LENGTH))
                .transpose()?,
            course_desc: payload
                .course_desc
                .as_deref()
                .map(|v| validate::text("courseDesc", v, 0, MAX_COURSE_DESC_LENGTH))
                .transpose()?,
            course_require: payload
                .course_require
                .as_deref()
                .map(|v| validate::text("courseRequire", v, 0, MAX_COURSE_REQUIRE_LENGTH))
                .transpose()?,
            course_class: payload
                .course_class
                .as_deref()
                .map(|v| validate::text("courseClass", v, 1, MAX_COURSE_CLASS_LENGTH))
                .transpose()?,
            teacher_id: payload.teacher_id,
        };

        let txn = self.db.begin().await?;

        let course_repository = CourseRepository::new(&txn);
        let course = course_repository
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| course_not_found(course_id))?;

        let teacher = find_teacher(&txn, changes.teacher_id.unwrap_or(course.teacher_id)).await?;

        // sessions follow their course, so the new teacher must be free for all of them
        if teacher.person_id != course.teacher_id {
            let sessions = CourseItemRepository::new(&txn)
                .find(ItemFilter {
                    course_ids: Some(vec![course_id]),
                    ..Default::default()
                })
                .await?;

            let checker = ConflictChecker::new(&txn);
            for session in &sessions {
                checker
                    .ensure_available(
                        teacher.person_id,
                        session.class_date,
                        session.class_begin_time,
                        session.class_end_time,
                        Some(session.item_id),
                    )
                    .await?;
            }
        }

        let course = course_repository.update(course, changes).await?;

        txn.commit().await?;

        tracing::info!("Updated course ID {}", course.course_id);

        Ok(course_dto(course, teacher.name))
    }

    /// Deletes a course that has never been scheduled
    ///
    /// # Returns
    /// - `Ok(())` - Course deleted
    /// - `Err(RequestError::NotFound)` - Course does not exist
    /// - `Err(RequestError::BlockedByDependents)` - Sessions exist, carrying `scheduledCount`
    pub async fn delete(&self, course_id: i32) -> Result<(), Error> {
        let course_repository = CourseRepository::new(self.db);
        if course_repository.find_by_id(course_id).await?.is_none() {
            return Err(course_not_found(course_id).into());
        }

        let scheduled_count = CourseItemRepository::new(self.db)
            .count_by_course(course_id)
            .await?;
        if scheduled_count > 0 {
            return Err(RequestError::BlockedByDependents {
                message: format!(
                    "Course is scheduled in {} sessions, delete them first",
                    scheduled_count
                ),
                data: json!({ "scheduledCount": scheduled_count }),
            }
            .into());
        }

        course_repository.delete(course_id).await?;

        tracing::info!("Deleted course ID {}", course_id);

        Ok(())
    }
}

pub(super) fn course_not_found(course_id: i32) -> RequestError {
    RequestError::NotFound(format!("Course {} not found", course_id))
}

/// The person `teacher_id` if it holds the teacher role
pub(super) async fn find_teacher<C: ConnectionTrait>(
    db: &C,
    teacher_id: i32,
) -> Result<entity::person::Model, Error> {
    PersonRepository::new(db)
        .find_by_id(teacher_id)
        .await?
        .filter(|p| p.role == Role::Teacher)
        .ok_or_else(|| {
            RequestError::Validation(format!(
                "Person {} does not exist or is not a teacher",
                teacher_id
            ))
            .into()
        })
}

fn course_dto(course: entity::course::Model, teacher_name: String) -> CourseDto {
    CourseDto {
        course_id: course.course_id,
        course_name: course.course_name,
        course_desc: course.course_desc,
        course_require: course.course_require,
        course_class: course.course_class,
        teacher_id: course.teacher_id,
        teacher_name,
    }
}
