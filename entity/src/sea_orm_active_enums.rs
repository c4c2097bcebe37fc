use sea_orm::entity::prelude::*;

/// Role a person holds in the training platform, fixed at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Role {
    #[sea_orm(string_value = "employee")]
    Employee,
    #[sea_orm(string_value = "teacher")]
    Teacher,
    #[sea_orm(string_value = "planner")]
    Planner,
}

/// Lifecycle status of a training plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PlanStatus {
    #[sea_orm(string_value = "planning")]
    Planning,
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}
