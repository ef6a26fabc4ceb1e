//! Audit-log data repository.
//!
//! Log rows are append-only; this repository exposes creation and filtered
//! listing, nothing else.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    model::log::{CreateLogParams, Log, LogFilter},
    util::id::new_id,
};

/// Repository providing database operations for the audit log.
pub struct LogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogRepository<'a> {
    /// Creates a new LogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a log row, stamped with the current time.
    ///
    /// # Arguments
    /// - `param` - Log fields including the JSON queue snapshot
    ///
    /// # Returns
    /// - `Ok(Log)` - The stored row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateLogParams) -> Result<Log, DbErr> {
        let entity = entity::log::Entity::insert(entity::log::ActiveModel {
            id: ActiveValue::Set(new_id()),
            team_id: ActiveValue::Set(param.team_id),
            user_id: ActiveValue::Set(param.user_id),
            wow_id: ActiveValue::Set(param.wow_id),
            created_at: ActiveValue::Set(Utc::now()),
            queue: ActiveValue::Set(param.queue),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Log::from_entity(entity))
    }

    /// Lists a team's log rows, newest first.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    /// - `filter` - Optional item filter plus limit/offset
    ///
    /// # Returns
    /// - `Ok(Vec<Log>)` - Matching rows by descending creation time
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, team_id: &str, filter: LogFilter) -> Result<Vec<Log>, DbErr> {
        let mut query = entity::prelude::Log::find()
            .filter(entity::log::Column::TeamId.eq(team_id))
            .order_by_desc(entity::log::Column::CreatedAt);

        if let Some(wow_id) = filter.wow_id {
            query = query.filter(entity::log::Column::WowId.eq(wow_id));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Log::from_entity).collect())
    }
}
