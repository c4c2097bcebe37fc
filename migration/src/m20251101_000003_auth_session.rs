use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_person::Person;

static IDX_AUTH_SESSION_PERSON_ID: &str = "idx-auth_session-person_id";
static FK_AUTH_SESSION_PERSON_ID: &str = "fk-auth_session-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthSession::Table)
                    .if_not_exists()
                    .col(string_len(AuthSession::SessionId, 64).primary_key())
                    .col(integer(AuthSession::PersonId))
                    .col(string_len(AuthSession::Role, 20))
                    .col(timestamp(AuthSession::CreatedAt))
                    .col(timestamp(AuthSession::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUTH_SESSION_PERSON_ID)
                    .table(AuthSession::Table)
                    .col(AuthSession::PersonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUTH_SESSION_PERSON_ID)
                    .from_tbl(AuthSession::Table)
                    .from_col(AuthSession::PersonId)
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
                    .name(FK_AUTH_SESSION_PERSON_ID)
                    .table(AuthSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUTH_SESSION_PERSON_ID)
                    .table(AuthSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuthSession::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuthSession {
    Table,
    SessionId,
    PersonId,
    Role,
    CreatedAt,
    ExpiresAt,
}
