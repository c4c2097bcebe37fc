use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::Role;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub person_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub name: String,
    pub role: Role,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::account::Entity")]
    Account,
    #[sea_orm(has_many = "super::auth_session::Entity")]
    AuthSession,
    #[sea_orm(has_many = "super::course::Entity")]
    Course,
    #[sea_orm(has_many = "super::plan_employee::Entity")]
    PlanEmployee,
    #[sea_orm(has_many = "super::attendance_evaluation::Entity")]
    AttendanceEvaluation,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::auth_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthSession.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::plan_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanEmployee.def()
    }
}

impl Related<super::attendance_evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceEvaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
