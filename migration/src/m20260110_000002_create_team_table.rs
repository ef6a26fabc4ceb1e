use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(string(Team::Id).primary_key())
                    .col(string_len_uniq(Team::Name, 24))
                    .col(string(Team::Password))
                    .col(string_len(Team::Addon, 16))
                    .col(boolean(Team::IsVip).default(false))
                    .col(timestamp_with_time_zone_null(Team::VipEnd))
                    .col(string(Team::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_owner_id")
                            .from(Team::Table, Team::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teams_name")
                    .table(Team::Table)
                    .col(Team::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    Password,
    Addon,
    IsVip,
    VipEnd,
    OwnerId,
}
