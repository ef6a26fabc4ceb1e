use crate::server::{
    data::log::LogRepository,
    model::log::{CreateLogParams, LogFilter},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_team_with_owner;
use test_utils::factory::log::LogFactory;

mod create;
mod list;
