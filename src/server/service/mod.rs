//! Business logic orchestration between controllers and the data layer.

pub mod auth;
pub mod item;
pub mod queue;
pub mod raider;
pub mod team;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
