use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::PlanStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "training_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub plan_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub plan_name: String,
    pub plan_status: PlanStatus,
    pub plan_start_datetime: DateTime,
    pub plan_end_datetime: DateTime,
    pub creator_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::CreatorId",
        to = "super::person::Column::PersonId"
    )]
    Creator,
    #[sea_orm(has_many = "super::plan_course_item::Entity")]
    PlanCourseItem,
    #[sea_orm(has_many = "super::plan_employee::Entity")]
    PlanEmployee,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::plan_course_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanCourseItem.def()
    }
}

impl Related<super::plan_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanEmployee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
