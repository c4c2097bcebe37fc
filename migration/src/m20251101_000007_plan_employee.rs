use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_person::Person, m20251101_000004_training_plan::TrainingPlan};

static IDX_PLAN_EMPLOYEE_PERSON_ID: &str = "idx-plan_employee-person_id";
static FK_PLAN_EMPLOYEE_PLAN_ID: &str = "fk-plan_employee-plan_id";
static FK_PLAN_EMPLOYEE_PERSON_ID: &str = "fk-plan_employee-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanEmployee::Table)
                    .if_not_exists()
                    .col(integer(PlanEmployee::PlanId))
                    .col(integer(PlanEmployee::PersonId))
                    .primary_key(
                        Index::create()
                            .col(PlanEmployee::PlanId)
                            .col(PlanEmployee::PersonId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAN_EMPLOYEE_PERSON_ID)
                    .table(PlanEmployee::Table)
                    .col(PlanEmployee::PersonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAN_EMPLOYEE_PLAN_ID)
                    .from_tbl(PlanEmployee::Table)
                    .from_col(PlanEmployee::PlanId)
                    .to_tbl(TrainingPlan::Table)
                    .to_col(TrainingPlan::PlanId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAN_EMPLOYEE_PERSON_ID)
                    .from_tbl(PlanEmployee::Table)
                    .from_col(PlanEmployee::PersonId)
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
                    .name(FK_PLAN_EMPLOYEE_PERSON_ID)
                    .table(PlanEmployee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAN_EMPLOYEE_PLAN_ID)
                    .table(PlanEmployee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAN_EMPLOYEE_PERSON_ID)
                    .table(PlanEmployee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanEmployee::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlanEmployee {
    Table,
    PlanId,
    PersonId,
}
