use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WowItem::Table)
                    .if_not_exists()
                    .col(string(WowItem::Id).primary_key())
                    .col(integer(WowItem::WowId))
                    .col(string_len(WowItem::Addon, 16))
                    .col(string_len(WowItem::Lang, 4))
                    .col(text(WowItem::HtmlTooltip))
                    .col(string(WowItem::IconUrl))
                    .col(string(WowItem::OriginLink))
                    .to_owned(),
            )
            .await?;

        // Lookup key for the look-aside cache in front of the external API.
        manager
            .create_index(
                Index::create()
                    .name("idx_wow_items_wow_id_addon_lang")
                    .table(WowItem::Table)
                    .col(WowItem::WowId)
                    .col(WowItem::Addon)
                    .col(WowItem::Lang)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WowItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WowItem {
    Table,
    Id,
    WowId,
    Addon,
    Lang,
    HtmlTooltip,
    IconUrl,
    OriginLink,
}
