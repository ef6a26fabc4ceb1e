use crate::server::{data::queue::QueueRepository, model::queue::ReplaceQueueOutcome};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_team_with_owner;
use test_utils::factory::queue::create_queue_rows;
use test_utils::factory::raider::create_raider;

mod get;
mod get_all_for_team;
mod replace;
