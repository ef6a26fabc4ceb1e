mod item;
mod log;
mod queue;
mod raider;
mod team;
mod user;
