//! Item factory for creating locally cached item rows.

use entity::enums::{Addon, Language};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_row_id, next_id};

/// Factory for creating cached item entities with customizable fields.
pub struct WowItemFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    wow_id: i32,
    addon: Addon,
    lang: Language,
    html_tooltip: String,
    icon_url: String,
    origin_link: String,
}

impl<'a> WowItemFactory<'a> {
    /// Creates a new WowItemFactory with default values.
    ///
    /// Defaults:
    /// - wow_id: auto-incremented
    /// - addon: `Retail`, lang: `En`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_row_id(),
            wow_id: n as i32,
            addon: Addon::Retail,
            lang: Language::En,
            html_tooltip: format!("<table><tr><td>Item {}</td></tr></table>", n),
            icon_url: format!("https://wow.zamimg.com/images/wow/icons/large/item_{}.jpg", n),
            origin_link: format!("https://www.wowhead.com/item={}", n),
        }
    }

    pub fn wow_id(mut self, wow_id: i32) -> Self {
        self.wow_id = wow_id;
        self
    }

    pub fn addon(mut self, addon: Addon) -> Self {
        self.addon = addon;
        self
    }

    pub fn lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    pub fn html_tooltip(mut self, html_tooltip: impl Into<String>) -> Self {
        self.html_tooltip = html_tooltip.into();
        self
    }

    /// Builds and inserts the item entity into the database.
    pub async fn build(self) -> Result<entity::wow_item::Model, DbErr> {
        entity::wow_item::ActiveModel {
            id: ActiveValue::Set(self.id),
            wow_id: ActiveValue::Set(self.wow_id),
            addon: ActiveValue::Set(self.addon),
            lang: ActiveValue::Set(self.lang),
            html_tooltip: ActiveValue::Set(self.html_tooltip),
            icon_url: ActiveValue::Set(self.icon_url),
            origin_link: ActiveValue::Set(self.origin_link),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cached item with the given external id and default values.
pub async fn create_wow_item(
    db: &DatabaseConnection,
    wow_id: i32,
) -> Result<entity::wow_item::Model, DbErr> {
    WowItemFactory::new(db).wow_id(wow_id).build().await
}
