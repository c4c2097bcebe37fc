use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use entity::plan_course_item::Column;

use crate::server::data::{
    course::CourseRepository, person::PersonRepository, training_plan::TrainingPlanRepository,
};

/// Filters for scheduled session queries; empty filters match everything
#[derive(Default)]
pub struct ItemFilter {
    pub plan_ids: Option<Vec<i32>>,
    pub course_ids: Option<Vec<i32>>,
    /// Inclusive class date lower bound
    pub from: Option<NaiveDate>,
    /// Inclusive class date upper bound
    pub to: Option<NaiveDate>,
    pub descending: bool,
}

/// Column values for a new scheduled session
#[derive(Clone)]
pub struct NewCourseItem {
    pub plan_id: i32,
    pub course_id: i32,
    pub class_date: NaiveDate,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
}

/// Scheduled session joined with its course, plan and teacher
#[derive(Clone, Debug)]
pub struct SessionRecord {
    pub item: entity::plan_course_item::Model,
    pub course: entity::course::Model,
    pub plan: entity::training_plan::Model,
    pub teacher_name: String,
}

pub struct CourseItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseItemRepository<'a, C> {
    /// Creates a new instance of [`CourseItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        item: NewCourseItem,
    ) -> Result<entity::plan_course_item::Model, DbErr> {
        let item = entity::plan_course_item::ActiveModel {
            plan_id: ActiveValue::Set(item.plan_id),
            course_id: ActiveValue::Set(item.course_id),
            class_date: ActiveValue::Set(item.class_date),
            class_begin_time: ActiveValue::Set(item.class_begin_time),
            class_end_time: ActiveValue::Set(item.class_end_time),
            location: ActiveValue::Set(item.location),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        item_id: i32,
    ) -> Result<Option<entity::plan_course_item::Model>, DbErr> {
        entity::prelude::PlanCourseItem::find_by_id(item_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(
        &self,
        item_ids: &[i32],
    ) -> Result<Vec<entity::plan_course_item::Model>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PlanCourseItem::find()
            .filter(Column::ItemId.is_in(item_ids.iter().copied()))
            .order_by_asc(Column::ItemId)
            .all(self.db)
            .await
    }

    /// Sessions matching `filter`, ordered by date then begin time
    pub async fn find(
        &self,
        filter: ItemFilter,
    ) -> Result<Vec<entity::plan_course_item::Model>, DbErr> {
        filtered(filter).all(self.db).await
    }

    /// One page of sessions matching `filter` with the total match count
    ///
    /// `page` is 1-based.
    pub async fn find_page(
        &self,
        filter: ItemFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<entity::plan_course_item::Model>, u64), DbErr> {
        let paginator = filtered(filter).paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((items, total))
    }

    /// Sessions of any of `course_ids` held on `date`, optionally excluding one session
    pub async fn find_on_date(
        &self,
        course_ids: &[i32],
        date: NaiveDate,
        exclude_item_id: Option<i32>,
    ) -> Result<Vec<entity::plan_course_item::Model>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::PlanCourseItem::find()
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .filter(Column::ClassDate.eq(date));

        if let Some(item_id) = exclude_item_id {
            query = query.filter(Column::ItemId.ne(item_id));
        }

        query.all(self.db).await
    }

    pub async fn update(
        &self,
        item: entity::plan_course_item::ActiveModel,
    ) -> Result<entity::plan_course_item::Model, DbErr> {
        item.update(self.db).await
    }

    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PlanCourseItem::delete_by_id(item_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanCourseItem::delete_many()
            .filter(Column::PlanId.eq(plan_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::PlanCourseItem::find().count(self.db).await
    }

    pub async fn count_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PlanCourseItem::find()
            .filter(Column::PlanId.eq(plan_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PlanCourseItem::find()
            .filter(Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }

    /// Joins each session with its course, plan and teacher name, preserving order.
    ///
    /// Sessions whose course or plan row is missing are skipped.
    pub async fn load_sessions(
        &self,
        items: Vec<entity::plan_course_item::Model>,
    ) -> Result<Vec<SessionRecord>, DbErr> {
        let course_ids = unique(items.iter().map(|i| i.course_id));
        let plan_ids = unique(items.iter().map(|i| i.plan_id));

        let courses: HashMap<i32, entity::course::Model> = CourseRepository::new(self.db)
            .find_by_ids(&course_ids)
            .await?
            .into_iter()
            .map(|c| (c.course_id, c))
            .collect();
        let plans: HashMap<i32, entity::training_plan::Model> =
            TrainingPlanRepository::new(self.db)
                .find_by_ids(&plan_ids)
                .await?
                .into_iter()
                .map(|p| (p.plan_id, p))
                .collect();

        let teacher_ids = unique(courses.values().map(|c| c.teacher_id));
        let teachers: HashMap<i32, String> = PersonRepository::new(self.db)
            .find_by_ids(&teacher_ids)
            .await?
            .into_iter()
            .map(|p| (p.person_id, p.name))
            .collect();

        let sessions = items
            .into_iter()
            .filter_map(|item| {
                let course = courses.get(&item.course_id)?.clone();
                let plan = plans.get(&item.plan_id)?.clone();
                let teacher_name = teachers.get(&course.teacher_id).cloned().unwrap_or_default();

                Some(SessionRecord {
                    item,
                    course,
                    plan,
                    teacher_name,
                })
            })
            .collect();

        Ok(sessions)
    }
}

fn filtered(filter: ItemFilter) -> Select<entity::plan_course_item::Entity> {
    let mut condition = Condition::all();

    if let Some(plan_ids) = filter.plan_ids {
        condition = condition.add(Column::PlanId.is_in(plan_ids));
    }
    if let Some(course_ids) = filter.course_ids {
        condition = condition.add(Column::CourseId.is_in(course_ids));
    }
    if let Some(from) = filter.from {
        condition = condition.add(Column::ClassDate.gte(from));
    }
    if let Some(to) = filter.to {
        condition = condition.add(Column::ClassDate.lte(to));
    }

    let query = entity::prelude::PlanCourseItem::find().filter(condition);

    if filter.descending {
        query
            .order_by_desc(Column::ClassDate)
            .order_by_desc(Column::ClassBeginTime)
            .order_by_desc(Column::ItemId)
    } else {
        query
            .order_by_asc(Column::ClassDate)
            .order_by_asc(Column::ClassBeginTime)
            .order_by_asc(Column::ItemId)
    }
}

/// Distinct values in first-seen order
pub(crate) fn unique(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}
