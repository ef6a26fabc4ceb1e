//! Best-effort TTL cache in front of the aggregate reads.
//!
//! The cache is strictly an optimization: every cached value can be rebuilt
//! from the database, so cache failures are logged and swallowed rather than
//! surfaced to callers. A Redis outage degrades reads to the database, it
//! never fails a request.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::warn;

/// Cache key for a team's full aggregate, by team id.
pub fn full_team_key(team_id: &str) -> String {
    format!("full-team:{team_id}")
}

/// Cache key for the team name to id mapping.
///
/// Team names are immutable once created, so entries under this key are
/// never invalidated.
pub fn team_name_key(name: &str) -> String {
    format!("team-name:{name}")
}

/// String key-value cache with optional per-entry TTL.
///
/// All operations are infallible from the caller's perspective: a backend
/// failure behaves like a miss (`get` returns `None`, `set` and `delete` do
/// nothing) and is logged at warn severity.
#[async_trait]
pub trait TtlCache: Send + Sync {
    /// Stores `value` under `key`, expiring after `ttl` if given.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>);

    /// Fetches the value under `key`, if present and unexpired.
    async fn get(&self, key: &str) -> Option<String>;

    /// Drops the entry under `key`, if any.
    async fn delete(&self, key: &str);
}

/// Redis-backed cache over a multiplexed connection manager.
///
/// `ConnectionManager` reconnects on its own; each operation clones the
/// handle, which is the crate's intended cheap-clone usage.
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }

    /// Opens a connection manager against the given Redis URL.
    pub async fn connect(url: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;
        Ok(Self::new(manager))
    }
}

#[async_trait]
impl TtlCache for RedisCache {
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
        let mut conn = self.manager.clone();
        let result: Result<(), redis::RedisError> = match ttl {
            Some(ttl) => conn.set_ex(key, value, ttl.as_secs()).await,
            None => conn.set(key, value).await,
        };
        if let Err(e) = result {
            warn!("Cache set failed for key {}: {}", key, e);
        }
    }

    async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.manager.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Cache get failed for key {}: {}", key, e);
                None
            }
        }
    }

    async fn delete(&self, key: &str) {
        let mut conn = self.manager.clone();
        if let Err(e) = conn.del::<_, ()>(key).await {
            warn!("Cache delete failed for key {}: {}", key, e);
        }
    }
}

/// In-process cache used when no Redis URL is configured, and in tests.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TtlCache for MemoryCache {
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
        let entry = Entry {
            value: value.to_string(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), entry);
        }
    }

    async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(key) {
            Some(entry) => {
                if let Some(expires_at) = entry.expires_at {
                    if expires_at <= Instant::now() {
                        entries.remove(key);
                        return None;
                    }
                }
                Some(entry.value.clone())
            }
            None => None,
        }
    }

    async fn delete(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}
