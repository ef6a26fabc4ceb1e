//! Domain models for the loot-assignment audit log.

use chrono::{DateTime, Utc};

/// One append-only audit record of a queue replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    /// Unique identifier for the log row.
    pub id: String,
    /// Team whose queue was replaced.
    pub team_id: String,
    /// User who performed the replacement.
    pub user_id: String,
    /// The game item the queue belongs to.
    pub wow_id: i32,
    /// When the replacement happened.
    pub created_at: DateTime<Utc>,
    /// JSON snapshot of the queue as written.
    pub queue: String,
}

impl Log {
    /// Converts an entity model to a log domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Log` - The converted log domain model
    pub fn from_entity(entity: entity::log::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            user_id: entity.user_id,
            wow_id: entity.wow_id,
            created_at: entity.created_at,
            queue: entity.queue,
        }
    }
}

/// Parameters for appending a log row.
#[derive(Debug, Clone)]
pub struct CreateLogParams {
    pub team_id: String,
    pub user_id: String,
    pub wow_id: i32,
    /// JSON snapshot of the queue as written.
    pub queue: String,
}

/// Filter for listing log rows, newest first.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    /// Restrict to one item's queue history.
    pub wow_id: Option<i32>,
    /// Maximum number of rows to return.
    pub limit: Option<u64>,
    /// Number of rows to skip.
    pub offset: Option<u64>,
}
