//! SeaORM entity definitions for the lootboard database schema.
//!
//! One module per table plus the shared string-valued enums (game version,
//! raider class, tooltip language). Import everything through `prelude`.

pub mod enums;
pub mod log;
pub mod prelude;
pub mod queue;
pub mod raider;
pub mod team;
pub mod user;
pub mod wow_item;
