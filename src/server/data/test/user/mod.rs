use crate::server::{
    data::user::{ActivateOutcome, UserRepository},
    model::user::{CreateUserParams, UniquenessViolation},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::user::UserFactory;

mod change_password;
mod check_uniqueness;
mod create;
mod delete;
mod find;
mod verify_credentials;
