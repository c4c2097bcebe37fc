use sea_orm::entity::prelude::*;

/// One scheduled session of a course within a training plan
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "plan_course_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub item_id: i32,
    pub plan_id: i32,
    pub course_id: i32,
    pub class_date: Date,
    pub class_begin_time: Time,
    pub class_end_time: Time,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training_plan::Entity",
        from = "Column::PlanId",
        to = "super::training_plan::Column::PlanId"
    )]
    TrainingPlan,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::CourseId"
    )]
    Course,
    #[sea_orm(has_many = "super::attendance_evaluation::Entity")]
    AttendanceEvaluation,
}

impl Related<super::training_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingPlan.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::attendance_evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceEvaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
