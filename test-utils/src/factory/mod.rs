//! Factories for creating test entities with sensible defaults.
//!
//! Each factory offers a builder pattern over one entity plus `create_*`
//! shorthands for the common case. Defaults are unique per call so multiple
//! factory invocations in a single test never collide.

pub mod helpers;
pub mod log;
pub mod queue;
pub mod raider;
pub mod team;
pub mod user;
pub mod wow_item;
