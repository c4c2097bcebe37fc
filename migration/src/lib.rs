pub use sea_orm_migration::prelude::*;

mod m20251101_000001_person;
mod m20251101_000002_account;
mod m20251101_000003_auth_session;
mod m20251101_000004_training_plan;
mod m20251101_000005_course;
mod m20251101_000006_plan_course_item;
mod m20251101_000007_plan_employee;
mod m20251101_000008_attendance_evaluation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_person::Migration),
            Box::new(m20251101_000002_account::Migration),
            Box::new(m20251101_000003_auth_session::Migration),
            Box::new(m20251101_000004_training_plan::Migration),
            Box::new(m20251101_000005_course::Migration),
            Box::new(m20251101_000006_plan_course_item::Migration),
            Box::new(m20251101_000007_plan_employee::Migration),
            Box::new(m20251101_000008_attendance_evaluation::Migration),
        ]
    }
}
