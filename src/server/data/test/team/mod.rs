use crate::server::{
    data::team::TeamRepository,
    model::team::{CreateTeamParams, UpdateTeamParams},
};
use entity::enums::Addon;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_team_with_owner;
use test_utils::factory::team::TeamFactory;
use test_utils::factory::user::create_user;

mod create;
mod delete;
mod find;
mod update;
