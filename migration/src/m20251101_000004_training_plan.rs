use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_person::Person;

static FK_TRAINING_PLAN_CREATOR_ID: &str = "fk-training_plan-creator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingPlan::PlanId))
                    .col(string_len(TrainingPlan::PlanName, 100))
                    .col(string_len(TrainingPlan::PlanStatus, 20))
                    .col(timestamp(TrainingPlan::PlanStartDatetime))
                    .col(timestamp(TrainingPlan::PlanEndDatetime))
                    .col(integer(TrainingPlan::CreatorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRAINING_PLAN_CREATOR_ID)
                    .from_tbl(TrainingPlan::Table)
                    .from_col(TrainingPlan::CreatorId)
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
                    .name(FK_TRAINING_PLAN_CREATOR_ID)
                    .table(TrainingPlan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrainingPlan::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TrainingPlan {
    Table,
    PlanId,
    PlanName,
    PlanStatus,
    PlanStartDatetime,
    PlanEndDatetime,
    CreatorId,
}
