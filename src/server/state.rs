//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. Every field is cheap to clone:
//! the database connection is a pool handle, the trait objects are behind
//! `Arc`, and the token codec shares its keys internally.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::TtlCache, config::Config, mailer::Mailer, scheduler::deletion::DeletionTasks,
    token::TokenCodec, wowhead::ItemApi,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Best-effort TTL cache in front of the team-aggregate reads.
    pub cache: Arc<dyn TtlCache>,

    /// Outbound email transport for registration and confirmation tokens.
    pub mailer: Arc<dyn Mailer>,

    /// External item-lookup API client.
    pub item_api: Arc<dyn ItemApi>,

    /// Codec for signed, expiring, purpose-scoped tokens.
    pub tokens: TokenCodec,

    /// Scheduler for one-shot delayed jobs (inactive-user deletion).
    pub scheduler: Arc<dyn DeletionTasks>,

    pub config: Config,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - TTL cache implementation
    /// - `mailer` - Email transport
    /// - `item_api` - External item API client
    /// - `tokens` - Token codec
    /// - `scheduler` - Delayed-deletion scheduler
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        cache: Arc<dyn TtlCache>,
        mailer: Arc<dyn Mailer>,
        item_api: Arc<dyn ItemApi>,
        tokens: TokenCodec,
        scheduler: Arc<dyn DeletionTasks>,
        config: Config,
    ) -> Self {
        Self {
            db,
            cache,
            mailer,
            item_api,
            tokens,
            scheduler,
            config,
        }
    }
}
