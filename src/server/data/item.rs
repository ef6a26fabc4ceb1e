//! Item data repository for the local cache of external item metadata.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    model::item::{CreateWowItemParams, WowItem},
    util::id::new_id,
};

/// Repository providing database operations for cached game items.
pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    /// Creates a new ItemRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ItemRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an item by its local row id.
    ///
    /// # Arguments
    /// - `id` - The item's row id
    ///
    /// # Returns
    /// - `Ok(Some(WowItem))` - Item found
    /// - `Ok(None)` - No item with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<WowItem>, DbErr> {
        let entity = entity::prelude::WowItem::find_by_id(id).one(self.db).await?;

        Ok(entity.map(WowItem::from_entity))
    }

    /// Finds an item by its logical key (wow_id, addon, lang).
    ///
    /// # Arguments
    /// - `wow_id` - The game's numeric item id
    /// - `addon` - Game edition the tooltip was rendered for
    /// - `lang` - Tooltip language
    ///
    /// # Returns
    /// - `Ok(Some(WowItem))` - Item cached locally
    /// - `Ok(None)` - Not cached; caller falls through to the external API
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_lookup(
        &self,
        wow_id: i32,
        addon: entity::enums::Addon,
        lang: entity::enums::Language,
    ) -> Result<Option<WowItem>, DbErr> {
        let entity = entity::prelude::WowItem::find()
            .filter(entity::wow_item::Column::WowId.eq(wow_id))
            .filter(entity::wow_item::Column::Addon.eq(addon))
            .filter(entity::wow_item::Column::Lang.eq(lang))
            .one(self.db)
            .await?;

        Ok(entity.map(WowItem::from_entity))
    }

    /// Persists a freshly fetched item.
    ///
    /// # Arguments
    /// - `param` - Item fields as fetched from the external API
    ///
    /// # Returns
    /// - `Ok(WowItem)` - The stored item with its generated row id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateWowItemParams) -> Result<WowItem, DbErr> {
        let entity = entity::wow_item::Entity::insert(entity::wow_item::ActiveModel {
            id: ActiveValue::Set(new_id()),
            wow_id: ActiveValue::Set(param.wow_id),
            addon: ActiveValue::Set(param.addon),
            lang: ActiveValue::Set(param.lang),
            html_tooltip: ActiveValue::Set(param.html_tooltip),
            icon_url: ActiveValue::Set(param.icon_url),
            origin_link: ActiveValue::Set(param.origin_link),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(WowItem::from_entity(entity))
    }
}
