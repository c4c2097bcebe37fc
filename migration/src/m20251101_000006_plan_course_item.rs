use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000004_training_plan::TrainingPlan, m20251101_000005_course::Course};

static IDX_PLAN_COURSE_ITEM_CLASS_DATE: &str = "idx-plan_course_item-class_date";
static IDX_PLAN_COURSE_ITEM_COURSE_ID: &str = "idx-plan_course_item-course_id";
static FK_PLAN_COURSE_ITEM_PLAN_ID: &str = "fk-plan_course_item-plan_id";
static FK_PLAN_COURSE_ITEM_COURSE_ID: &str = "fk-plan_course_item-course_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanCourseItem::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanCourseItem::ItemId))
                    .col(integer(PlanCourseItem::PlanId))
                    .col(integer(PlanCourseItem::CourseId))
                    .col(date(PlanCourseItem::ClassDate))
                    .col(time(PlanCourseItem::ClassBeginTime))
                    .col(time(PlanCourseItem::ClassEndTime))
                    .col(string_len(PlanCourseItem::Location, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAN_COURSE_ITEM_CLASS_DATE)
                    .table(PlanCourseItem::Table)
                    .col(PlanCourseItem::ClassDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAN_COURSE_ITEM_COURSE_ID)
                    .table(PlanCourseItem::Table)
                    .col(PlanCourseItem::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAN_COURSE_ITEM_PLAN_ID)
                    .from_tbl(PlanCourseItem::Table)
                    .from_col(PlanCourseItem::PlanId)
                    .to_tbl(TrainingPlan::Table)
                    .to_col(TrainingPlan::PlanId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAN_COURSE_ITEM_COURSE_ID)
                    .from_tbl(PlanCourseItem::Table)
                    .from_col(PlanCourseItem::CourseId)
                    .to_tbl(Course::Table)
                    .to_col(Course::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAN_COURSE_ITEM_COURSE_ID)
                    .table(PlanCourseItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAN_COURSE_ITEM_PLAN_ID)
                    .table(PlanCourseItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAN_COURSE_ITEM_COURSE_ID)
                    .table(PlanCourseItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAN_COURSE_ITEM_CLASS_DATE)
                    .table(PlanCourseItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanCourseItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlanCourseItem {
    Table,
    ItemId,
    PlanId,
    CourseId,
    ClassDate,
    ClassBeginTime,
    ClassEndTime,
    Location,
}
