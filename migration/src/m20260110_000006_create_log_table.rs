use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_user_table::User, m20260110_000002_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Log::Table)
                    .if_not_exists()
                    .col(string(Log::Id).primary_key())
                    .col(string(Log::TeamId))
                    .col(string(Log::UserId))
                    .col(integer(Log::WowId))
                    .col(
                        timestamp_with_time_zone(Log::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(text(Log::Queue))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_log_team_id")
                            .from(Log::Table, Log::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_log_user_id")
                            .from(Log::Table, Log::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logs_team_id")
                    .table(Log::Table)
                    .col(Log::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Log::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Log {
    Table,
    Id,
    TeamId,
    UserId,
    WowId,
    CreatedAt,
    Queue,
}
