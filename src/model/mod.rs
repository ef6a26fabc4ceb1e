//! Shared DTO types for the HTTP API.

pub mod api;
pub mod auth;
pub mod item;
pub mod log;
pub mod queue;
pub mod raider;
pub mod team;
pub mod user;
