use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_person::Person, m20251101_000006_plan_course_item::PlanCourseItem};

static IDX_ATTENDANCE_EVALUATION_ITEM_ID: &str = "idx-attendance_evaluation-item_id";
static FK_ATTENDANCE_EVALUATION_PERSON_ID: &str = "fk-attendance_evaluation-person_id";
static FK_ATTENDANCE_EVALUATION_ITEM_ID: &str = "fk-attendance_evaluation-item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceEvaluation::Table)
                    .if_not_exists()
                    .col(integer(AttendanceEvaluation::PersonId))
                    .col(integer(AttendanceEvaluation::ItemId))
                    .col(double_null(AttendanceEvaluation::SelfScore))
                    .col(text(AttendanceEvaluation::SelfComment))
                    .col(double_null(AttendanceEvaluation::TeacherScore))
                    .col(text(AttendanceEvaluation::TeacherComment))
                    .col(double(AttendanceEvaluation::ScoreRatio).default(0.5))
                    .col(timestamp(AttendanceEvaluation::CreatedAt))
                    .col(timestamp(AttendanceEvaluation::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(AttendanceEvaluation::PersonId)
                            .col(AttendanceEvaluation::ItemId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTENDANCE_EVALUATION_ITEM_ID)
                    .table(AttendanceEvaluation::Table)
                    .col(AttendanceEvaluation::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTENDANCE_EVALUATION_PERSON_ID)
                    .from_tbl(AttendanceEvaluation::Table)
                    .from_col(AttendanceEvaluation::PersonId)
                    .to_tbl(Person::Table)
                    .to_col(Person::PersonId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTENDANCE_EVALUATION_ITEM_ID)
                    .from_tbl(AttendanceEvaluation::Table)
                    .from_col(AttendanceEvaluation::ItemId)
                    .to_tbl(PlanCourseItem::Table)
                    .to_col(PlanCourseItem::ItemId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTENDANCE_EVALUATION_ITEM_ID)
                    .table(AttendanceEvaluation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTENDANCE_EVALUATION_PERSON_ID)
                    .table(AttendanceEvaluation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTENDANCE_EVALUATION_ITEM_ID)
                    .table(AttendanceEvaluation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AttendanceEvaluation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AttendanceEvaluation {
    Table,
    PersonId,
    ItemId,
    SelfScore,
    SelfComment,
    TeacherScore,
    TeacherComment,
    ScoreRatio,
    CreatedAt,
    UpdatedAt,
}
