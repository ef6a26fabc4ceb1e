use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique constraint over (team_id, name, class): active-uniqueness
        // only applies to rows with is_active = true and is enforced by an
        // insert-time pre-check in the repository.
        manager
            .create_table(
                Table::create()
                    .table(Raider::Table)
                    .if_not_exists()
                    .col(string(Raider::Id).primary_key())
                    .col(string_len(Raider::Name, 12))
                    .col(string(Raider::TeamId))
                    .col(string_len(Raider::Class, 16))
                    .col(boolean(Raider::IsActive).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_raider_team_id")
                            .from(Raider::Table, Raider::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Raider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Raider {
    Table,
    Id,
    Name,
    TeamId,
    Class,
    IsActive,
}
