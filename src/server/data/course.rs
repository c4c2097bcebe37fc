use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::course::Column;

/// Filters for course listings
#[derive(Default)]
pub struct CourseFilter {
    pub course_class: Option<String>,
    /// Substring of the course name
    pub keyword: Option<String>,
    pub teacher_id: Option<i32>,
}

/// Column values for a new course
pub struct NewCourse {
    pub course_name: String,
    pub course_desc: String,
    pub course_require: String,
    pub course_class: String,
    pub teacher_id: i32,
}

/// Changes applied by [`CourseRepository::update`]; `None` leaves a column untouched
#[derive(Default)]
pub struct CourseChanges {
    pub course_name: Option<String>,
    pub course_desc: Option<String>,
    pub course_require: Option<String>,
    pub course_class: Option<String>,
    pub teacher_id: Option<i32>,
}

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    /// Creates a new instance of [`CourseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, course: NewCourse) -> Result<entity::course::Model, DbErr> {
        let course = entity::course::ActiveModel {
            course_name: ActiveValue::Set(course.course_name),
            course_desc: ActiveValue::Set(course.course_desc),
            course_require: ActiveValue::Set(course.course_require),
            course_class: ActiveValue::Set(course.course_class),
            teacher_id: ActiveValue::Set(course.teacher_id),
            ..Default::default()
        };

        course.insert(self.db).await
    }

    pub async fn find_by_id(&self, course_id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(&self, course_ids: &[i32]) -> Result<Vec<entity::course::Model>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Course::find()
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_by_teacher(&self, teacher_id: i32) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::CourseId)
            .all(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .order_by_asc(Column::CourseId)
            .all(self.db)
            .await
    }

    /// One page of courses matching `filter`, newest first, with the total match count
    ///
    /// `page` is 1-based.
    pub async fn find_page(
        &self,
        filter: CourseFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<entity::course::Model>, u64), DbErr> {
        let mut query = entity::prelude::Course::find();

        if let Some(course_class) = filter.course_class {
            query = query.filter(Column::CourseClass.eq(course_class));
        }
        if let Some(keyword) = filter.keyword {
            query = query.filter(Column::CourseName.contains(keyword));
        }
        if let Some(teacher_id) = filter.teacher_id {
            query = query.filter(Column::TeacherId.eq(teacher_id));
        }

        let paginator = query
            .order_by_desc(Column::CourseId)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let courses = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((courses, total))
    }

    pub async fn update(
        &self,
        course: entity::course::Model,
        changes: CourseChanges,
    ) -> Result<entity::course::Model, DbErr> {
        let mut course: entity::course::ActiveModel = course.into();

        if let Some(name) = changes.course_name {
            course.course_name = ActiveValue::Set(name);
        }
        if let Some(desc) = changes.course_desc {
            course.course_desc = ActiveValue::Set(desc);
        }
        if let Some(require) = changes.course_require {
            course.course_require = ActiveValue::Set(require);
        }
        if let Some(class) = changes.course_class {
            course.course_class = ActiveValue::Set(class);
        }
        if let Some(teacher_id) = changes.teacher_id {
            course.teacher_id = ActiveValue::Set(teacher_id);
        }

        course.update(self.db).await
    }

    pub async fn delete(&self, course_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Course::delete_by_id(course_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }

    pub async fn count_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Course::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .count(self.db)
            .await
    }
}
