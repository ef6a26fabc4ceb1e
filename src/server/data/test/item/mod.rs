use crate::server::{data::item::ItemRepository, model::item::CreateWowItemParams};
use entity::enums::{Addon, Language};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::wow_item::{create_wow_item, WowItemFactory};

mod create;
mod find;
