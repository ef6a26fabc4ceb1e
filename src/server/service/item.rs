//! Game-item resolution against the local cache and the external site.
//!
//! Items are resolved lazily: the first request for a (wow_id, addon, lang)
//! triple hits the external API and persists the result, every later request
//! is served from the database. A "no such item" answer is never persisted,
//! so a wrong id stays cheap to retry once the item actually exists.

use sea_orm::DatabaseConnection;
use tracing::info;

use entity::enums::{Addon, Language};

use crate::server::{
    data::item::ItemRepository,
    error::{api::ApiError, AppError},
    model::item::WowItem,
    wowhead::ItemApi,
};

/// Service providing item lookup and resolution business logic.
pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
    api: &'a dyn ItemApi,
}

impl<'a> ItemService<'a> {
    /// Creates a new ItemService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `api` - External item lookup client
    ///
    /// # Returns
    /// - `ItemService` - New service instance
    pub fn new(db: &'a DatabaseConnection, api: &'a dyn ItemApi) -> Self {
        Self { db, api }
    }

    /// Fetches a stored item by its row id.
    ///
    /// # Arguments
    /// - `id` - The item's row id
    ///
    /// # Returns
    /// - `Ok(WowItem)` - The stored item
    /// - `Err(AppError::ApiErr)` - No row with that id
    pub async fn get_by_id(&self, id: &str) -> Result<WowItem, AppError> {
        ItemRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::ItemNotExists.into())
    }

    /// Resolves an item by its game id, fetching from the external API on a
    /// database miss.
    ///
    /// # Arguments
    /// - `wow_id` - The game's numeric item id
    /// - `addon` - Game edition to render the tooltip for
    /// - `lang` - Language to render the tooltip in
    ///
    /// # Returns
    /// - `Ok(WowItem)` - The stored or freshly fetched item
    /// - `Err(AppError::ApiErr)` - Neither the database nor the external
    ///   site knows the item
    /// - `Err(AppError)` - External API transport or parse failure
    pub async fn resolve(
        &self,
        wow_id: i32,
        addon: Addon,
        lang: Language,
    ) -> Result<WowItem, AppError> {
        let repo = ItemRepository::new(self.db);

        if let Some(item) = repo.find_by_lookup(wow_id, addon, lang).await? {
            return Ok(item);
        }

        let Some(fetched) = self.api.get_item(wow_id, addon, lang).await? else {
            return Err(ApiError::ItemNotExists.into());
        };

        let item = repo.create(fetched.into()).await?;
        info!("Fetched item {} ({:?}, {:?})", wow_id, addon, lang);

        Ok(item)
    }
}
