use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use entity::plan_employee::Column;

pub struct PlanEmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanEmployeeRepository<'a, C> {
    /// Creates a new instance of [`PlanEmployeeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn enroll(&self, plan_id: i32, person_id: i32) -> Result<(), DbErr> {
        entity::prelude::PlanEmployee::insert(entity::plan_employee::ActiveModel {
            plan_id: ActiveValue::Set(plan_id),
            person_id: ActiveValue::Set(person_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_enrolled(&self, plan_id: i32, person_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::PlanEmployee::find_by_id((plan_id, person_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    /// IDs of the employees enrolled in a plan, ascending
    pub async fn find_person_ids(&self, plan_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::PlanEmployee::find()
            .filter(Column::PlanId.eq(plan_id))
            .order_by_asc(Column::PersonId)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.person_id).collect())
    }

    /// IDs of the plans an employee is enrolled in, ascending
    pub async fn find_plan_ids(&self, person_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::PlanEmployee::find()
            .filter(Column::PersonId.eq(person_id))
            .order_by_asc(Column::PlanId)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.plan_id).collect())
    }

    pub async fn find_all(&self) -> Result<Vec<entity::plan_employee::Model>, DbErr> {
        entity::prelude::PlanEmployee::find().all(self.db).await
    }

    pub async fn remove(&self, plan_id: i32, person_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanEmployee::delete_by_id((plan_id, person_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn remove_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanEmployee::delete_many()
            .filter(Column::PlanId.eq(plan_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_by_plan(&self, plan_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PlanEmployee::find()
            .filter(Column::PlanId.eq(plan_id))
            .count(self.db)
            .await
    }
}
