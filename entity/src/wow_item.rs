//! Locally cached item metadata fetched from the external item API.
//!
//! Logical uniqueness key is (wow_id, addon, lang) — the same item looked up
//! for another game version or language is a distinct row.

use sea_orm::entity::prelude::*;

use crate::enums::{Addon, Language};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wow_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(indexed)]
    pub wow_id: i32,
    pub addon: Addon,
    pub lang: Language,
    #[sea_orm(column_type = "Text")]
    pub html_tooltip: String,
    pub icon_url: String,
    pub origin_link: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
