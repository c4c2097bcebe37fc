//! Type aliases for the entity models handed out by fixtures.

pub type PersonModel = entity::person::Model;
pub type PlanModel = entity::training_plan::Model;
pub type CourseModel = entity::course::Model;
pub type CourseItemModel = entity::plan_course_item::Model;
pub type EvaluationModel = entity::attendance_evaluation::Model;
