//! Initialization of logging, database, cache, mail, and the item API.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::server::{
    cache::{MemoryCache, RedisCache, TtlCache},
    config::Config,
    error::{config::ConfigError, AppError},
    mailer::{Mailer, SmtpMailer},
    wowhead::{ItemApi, WowheadApi},
};

/// Installs the global tracing subscriber.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects the TTL cache.
///
/// With `REDIS_URL` set, a Redis-backed cache is used; without it (or when
/// the connection fails) the service falls back to an in-process cache, so
/// cache availability never blocks startup.
pub async fn connect_to_cache(config: &Config) -> Arc<dyn TtlCache> {
    if let Some(url) = &config.redis_url {
        match RedisCache::connect(url).await {
            Ok(cache) => {
                info!("Connected to Redis cache");
                return Arc::new(cache);
            }
            Err(e) => {
                warn!("Redis unavailable, using in-memory cache: {e}");
            }
        }
    }

    Arc::new(MemoryCache::new())
}

/// Builds the SMTP mailer from configuration.
pub fn setup_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    let from = config.self_email.parse().map_err(|_| {
        ConfigError::InvalidEnvVar("SELF_EMAIL".to_string(), config.self_email.clone())
    })?;

    let mailer = SmtpMailer::new(
        &config.smtp_server,
        config.smtp_port,
        &config.smtp_user,
        &config.smtp_password,
        from,
    )?;

    Ok(Arc::new(mailer))
}

/// Builds the external item API client.
pub fn setup_item_api(config: &Config) -> Arc<dyn ItemApi> {
    Arc::new(WowheadApi::new(
        reqwest::Client::new(),
        &config.wowhead_url,
        &config.wowhead_icon_url,
    ))
}
