//! Domain models for cached game-item data.

use entity::enums::{Addon, Language};

use crate::server::wowhead::FetchedItem;

/// Game item with rendered tooltip markup.
///
/// Rows are a local cache of the external item site, keyed logically by
/// (wow_id, addon, lang); the same item in another language or edition is a
/// distinct row. Rows are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WowItem {
    /// Unique identifier for the local row.
    pub id: String,
    /// The game's own numeric item id.
    pub wow_id: i32,
    /// Game edition the tooltip was rendered for.
    pub addon: Addon,
    /// Language the tooltip was rendered in.
    pub lang: Language,
    /// HTML tooltip markup as served by the item site.
    pub html_tooltip: String,
    /// Full URL of the item's icon image.
    pub icon_url: String,
    /// Link back to the item's page on the external site.
    pub origin_link: String,
}

impl WowItem {
    /// Converts an entity model to an item domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `WowItem` - The converted item domain model
    pub fn from_entity(entity: entity::wow_item::Model) -> Self {
        Self {
            id: entity.id,
            wow_id: entity.wow_id,
            addon: entity.addon,
            lang: entity.lang,
            html_tooltip: entity.html_tooltip,
            icon_url: entity.icon_url,
            origin_link: entity.origin_link,
        }
    }
}

/// Parameters for persisting a freshly fetched item.
#[derive(Debug, Clone)]
pub struct CreateWowItemParams {
    pub wow_id: i32,
    pub addon: Addon,
    pub lang: Language,
    pub html_tooltip: String,
    pub icon_url: String,
    pub origin_link: String,
}

impl From<FetchedItem> for CreateWowItemParams {
    fn from(item: FetchedItem) -> Self {
        Self {
            wow_id: item.wow_id,
            addon: item.addon,
            lang: item.lang,
            html_tooltip: item.html_tooltip,
            icon_url: item.icon_url,
            origin_link: item.origin_link,
        }
    }
}
