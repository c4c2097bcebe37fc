use sea_orm::entity::prelude::*;

/// Self and teacher evaluation of one employee for one scheduled session.
///
/// The self columns are written by the employee, the teacher columns and
/// `score_ratio` by the grading teacher; neither writer touches the other's columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_evaluation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub person_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i32,
    pub self_score: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub self_comment: String,
    pub teacher_score: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub teacher_comment: String,
    pub score_ratio: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::PersonId"
    )]
    Person,
    #[sea_orm(
        belongs_to = "super::plan_course_item::Entity",
        from = "Column::ItemId",
        to = "super::plan_course_item::Column::ItemId"
    )]
    PlanCourseItem,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::plan_course_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanCourseItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
