use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_person::Person;

static IDX_COURSE_TEACHER_ID: &str = "idx-course-teacher_id";
static FK_COURSE_TEACHER_ID: &str = "fk-course-teacher_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::CourseId))
                    .col(string_len(Course::CourseName, 50))
                    .col(string_len(Course::CourseDesc, 100))
                    .col(string_len(Course::CourseRequire, 500))
                    .col(string_len(Course::CourseClass, 20))
                    .col(integer(Course::TeacherId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COURSE_TEACHER_ID)
                    .table(Course::Table)
                    .col(Course::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COURSE_TEACHER_ID)
                    .from_tbl(Course::Table)
                    .from_col(Course::TeacherId)
                    .to_tbl(Person::Table)
                    .to_col(Person::PersonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COURSE_TEACHER_ID)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COURSE_TEACHER_ID)
                    .table(Course::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    CourseId,
    CourseName,
    CourseDesc,
    CourseRequire,
    CourseClass,
    TeacherId,
}
