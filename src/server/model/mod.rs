//! Domain models and operation parameter types.
//!
//! These types sit between the data layer and the business logic layer:
//! repositories convert SeaORM entity models into domain models at the
//! infrastructure boundary, and services pass parameter structs down instead
//! of raw entity values.

pub mod auth;
pub mod item;
pub mod log;
pub mod queue;
pub mod raider;
pub mod team;
pub mod user;
