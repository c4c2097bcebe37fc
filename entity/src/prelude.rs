pub use super::account::Entity as Account;
pub use super::attendance_evaluation::Entity as AttendanceEvaluation;
pub use super::auth_session::Entity as AuthSession;
pub use super::course::Entity as Course;
pub use super::person::Entity as Person;
pub use super::plan_course_item::Entity as PlanCourseItem;
pub use super::plan_employee::Entity as PlanEmployee;
pub use super::training_plan::Entity as TrainingPlan;
