pub mod prelude;

pub mod account;
pub mod attendance_evaluation;
pub mod auth_session;
pub mod course;
pub mod plan_course_item;
pub mod plan_employee;
pub mod person;
pub mod sea_orm_active_enums;
pub mod training_plan;
