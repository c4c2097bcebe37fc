use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::PlanStatus;
use sea_orm::{
    sea_query::Order, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::training_plan::Column;

/// Filters and ordering for plan listings
pub struct PlanFilter {
    pub status: Option<PlanStatus>,
    /// Plans starting at or after this instant
    pub starts_from: Option<NaiveDateTime>,
    /// Plans ending at or before this instant
    pub ends_by: Option<NaiveDateTime>,
    /// Substring of the plan name
    pub keyword: Option<String>,
    pub sort_by: Column,
    pub descending: bool,
}

impl Default for PlanFilter {
    fn default() -> Self {
        Self {
            status: None,
            starts_from: None,
            ends_by: None,
            keyword: None,
            sort_by: Column::PlanStartDatetime,
            descending: true,
        }
    }
}

/// Changes applied by [`TrainingPlanRepository::update`]; `None` leaves a column untouched
#[derive(Default)]
pub struct PlanChanges {
    pub plan_name: Option<String>,
    pub plan_status: Option<PlanStatus>,
    pub plan_start_datetime: Option<NaiveDateTime>,
    pub plan_end_datetime: Option<NaiveDateTime>,
}

pub struct TrainingPlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingPlanRepository<'a, C> {
    /// Creates a new instance of [`TrainingPlanRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        plan_name: &str,
        plan_status: PlanStatus,
        start: NaiveDateTime,
        end: NaiveDateTime,
        creator_id: i32,
    ) -> Result<entity::training_plan::Model, DbErr> {
        let plan = entity::training_plan::ActiveModel {
            plan_name: ActiveValue::Set(plan_name.to_string()),
            plan_status: ActiveValue::Set(plan_status),
            plan_start_datetime: ActiveValue::Set(start),
            plan_end_datetime: ActiveValue::Set(end),
            creator_id: ActiveValue::Set(creator_id),
            ..Default::default()
        };

        plan.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        plan_id: i32,
    ) -> Result<Option<entity::training_plan::Model>, DbErr> {
        entity::prelude::TrainingPlan::find_by_id(plan_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(
        &self,
        plan_ids: &[i32],
    ) -> Result<Vec<entity::training_plan::Model>, DbErr> {
        if plan_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TrainingPlan::find()
            .filter(Column::PlanId.is_in(plan_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::training_plan::Model>, DbErr> {
        entity::prelude::TrainingPlan::find()
            .order_by_asc(Column::PlanId)
            .all(self.db)
            .await
    }

    /// One page of plans matching `filter` along with the total match count
    ///
    /// `page` is 1-based.
    pub async fn find_page(
        &self,
        filter: PlanFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<entity::training_plan::Model>, u64), DbErr> {
        let mut query = entity::prelude::TrainingPlan::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::PlanStatus.eq(status));
        }
        if let Some(starts_from) = filter.starts_from {
            query = query.filter(Column::PlanStartDatetime.gte(starts_from));
        }
        if let Some(ends_by) = filter.ends_by {
            query = query.filter(Column::PlanEndDatetime.lte(ends_by));
        }
        if let Some(keyword) = filter.keyword {
            query = query.filter(Column::PlanName.contains(keyword));
        }

        let order = if filter.descending {
            Order::Desc
        } else {
            Order::Asc
        };
        let paginator = query
            .order_by(filter.sort_by, order)
            .order_by_asc(Column::PlanId)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let plans = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((plans, total))
    }

    /// Applies `changes` to `plan`, returning the stored row
    pub async fn update(
        &self,
        plan: entity::training_plan::Model,
        changes: PlanChanges,
    ) -> Result<entity::training_plan::Model, DbErr> {
        let mut plan: entity::training_plan::ActiveModel = plan.into();

        if let Some(name) = changes.plan_name {
            plan.plan_name = ActiveValue::Set(name);
        }
        if let Some(status) = changes.plan_status {
            plan.plan_status = ActiveValue::Set(status);
        }
        if let Some(start) = changes.plan_start_datetime {
            plan.plan_start_datetime = ActiveValue::Set(start);
        }
        if let Some(end) = changes.plan_end_datetime {
            plan.plan_end_datetime = ActiveValue::Set(end);
        }

        plan.update(self.db).await
    }

    pub async fn delete(&self, plan_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainingPlan::delete_by_id(plan_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::TrainingPlan::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: PlanStatus) -> Result<u64, DbErr> {
        entity::prelude::TrainingPlan::find()
            .filter(Column::PlanStatus.eq(status))
            .count(self.db)
            .await
    }

    pub async fn count_by_creator(&self, creator_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TrainingPlan::find()
            .filter(Column::CreatorId.eq(creator_id))
            .count(self.db)
            .await
    }
}
