use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000002_create_team_table::Team, m20260110_000003_create_raider_table::Raider,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Queue rows reference raiders without cascade: raiders are
        // soft-deleted, so the rows stay resolvable for history.
        manager
            .create_table(
                Table::create()
                    .table(Queue::Table)
                    .if_not_exists()
                    .col(string(Queue::Id).primary_key())
                    .col(integer(Queue::Position))
                    .col(string(Queue::TeamId))
                    .col(string(Queue::RaiderId))
                    .col(integer(Queue::WowId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_queue_team_id")
                            .from(Queue::Table, Queue::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_queue_raider_id")
                            .from(Queue::Table, Queue::RaiderId)
                            .to(Raider::Table, Raider::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_queues_team_id_wow_id")
                    .table(Queue::Table)
                    .col(Queue::TeamId)
                    .col(Queue::WowId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Queue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Queue {
    Table,
    Id,
    Position,
    TeamId,
    RaiderId,
    WowId,
}
