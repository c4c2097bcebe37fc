use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_person::Person;

static FK_ACCOUNT_PERSON_ID: &str = "fk-account-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::AccountId))
                    .col(integer_uniq(Account::PersonId))
                    .col(string_len_uniq(Account::LoginName, 20))
                    .col(string(Account::PasswordHash))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACCOUNT_PERSON_ID)
                    .from_tbl(Account::Table)
                    .from_col(Account::PersonId)
                    .to_tbl(Person::Table)
                    .to_col(Person::PersonId)
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
                    .name(FK_ACCOUNT_PERSON_ID)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Account {
    Table,
    AccountId,
    PersonId,
    LoginName,
    PasswordHash,
}
