use entity::enums::{Addon, Language};
use serde::{Deserialize, Serialize};

use crate::server::model::item::WowItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: String,
    pub wow_id: i32,
    pub addon: Addon,
    pub lang: Language,
    pub html_tooltip: String,
    pub icon_url: String,
    pub origin_link: String,
}

impl ItemDto {
    pub fn from_model(item: WowItem) -> Self {
        Self {
            id: item.id,
            wow_id: item.wow_id,
            addon: item.addon,
            lang: item.lang,
            html_tooltip: item.html_tooltip,
            icon_url: item.icon_url,
            origin_link: item.origin_link,
        }
    }
}
