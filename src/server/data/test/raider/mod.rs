use crate::server::{
    data::raider::{CreateRaiderOutcome, RaiderRepository},
    model::raider::CreateRaiderParams,
};
use entity::enums::Class;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_team_with_owner;
use test_utils::factory::queue::create_queue_rows;
use test_utils::factory::raider::{create_raider, RaiderFactory};
use test_utils::factory::wow_item::create_wow_item;

mod create;
mod deactivate;
