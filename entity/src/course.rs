use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub course_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub course_name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub course_desc: String,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub course_require: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub course_class: String,
    pub teacher_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::TeacherId",
        to = "super::person::Column::PersonId"
    )]
    Teacher,
    #[sea_orm(has_many = "super::plan_course_item::Entity")]
    PlanCourseItem,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::plan_course_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanCourseItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
