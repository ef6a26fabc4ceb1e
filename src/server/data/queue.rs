//! Loot-queue data repository.
//!
//! Queues are only ever written wholesale: replacing the queue for a
//! (team, item) pair deletes every existing row and inserts the fresh
//! ordering inside one transaction, so readers never observe a partially
//! applied queue.

use std::collections::HashSet;

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    model::{
        queue::{ItemQueue, QueueEntry, ReplaceQueueOutcome},
        raider::Raider,
    },
    util::id::new_id,
};

/// Repository providing database operations for loot queues.
pub struct QueueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueRepository<'a> {
    /// Creates a new QueueRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `QueueRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the ordered queue for a (team, item) pair with raider detail.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    /// - `wow_id` - The game's numeric item id
    ///
    /// # Returns
    /// - `Ok(Vec<QueueEntry>)` - Entries by ascending position; empty if no queue
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, team_id: &str, wow_id: i32) -> Result<Vec<QueueEntry>, DbErr> {
        Self::get_on(self.db, team_id, wow_id).await
    }

    /// Replaces the queue for a (team, item) pair in one transaction.
    ///
    /// Deletes every existing row for the pair, validates that all given
    /// raider ids exist, and inserts fresh rows with positions 1..N in the
    /// order given. Any unknown raider rolls the whole operation back.
    /// Raider team membership is not checked, matching the foreign key.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    /// - `wow_id` - The game's numeric item id
    /// - `raider_ids` - Raider row ids in priority order; empty clears the queue
    ///
    /// # Returns
    /// - `Ok(ReplaceQueueOutcome::Replaced)` - The fresh ordered queue
    /// - `Ok(ReplaceQueueOutcome::UnknownRaider)` - Rolled back, nothing changed
    /// - `Err(DbErr)` - Database error; transaction rolled back
    pub async fn replace(
        &self,
        team_id: &str,
        wow_id: i32,
        raider_ids: &[String],
    ) -> Result<ReplaceQueueOutcome, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Queue::delete_many()
            .filter(entity::queue::Column::TeamId.eq(team_id))
            .filter(entity::queue::Column::WowId.eq(wow_id))
            .exec(&txn)
            .await?;

        let unique_ids: HashSet<&String> = raider_ids.iter().collect();
        let known = entity::prelude::Raider::find()
            .filter(entity::raider::Column::Id.is_in(unique_ids.iter().map(|id| id.as_str())))
            .count(&txn)
            .await?;
        if known != unique_ids.len() as u64 {
            txn.rollback().await?;
            return Ok(ReplaceQueueOutcome::UnknownRaider);
        }

        if !raider_ids.is_empty() {
            let rows = raider_ids.iter().enumerate().map(|(index, raider_id)| {
                entity::queue::ActiveModel {
                    id: ActiveValue::Set(new_id()),
                    position: ActiveValue::Set(index as i32 + 1),
                    team_id: ActiveValue::Set(team_id.to_string()),
                    raider_id: ActiveValue::Set(raider_id.clone()),
                    wow_id: ActiveValue::Set(wow_id),
                }
            });
            entity::prelude::Queue::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;

        let entries = Self::get_on(self.db, team_id, wow_id).await?;
        Ok(ReplaceQueueOutcome::Replaced(entries))
    }

    /// Deletes all queue rows for a (team, item) pair.
    ///
    /// Deleting an absent queue is a no-op; callers that must distinguish
    /// check `exists` first.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    /// - `wow_id` - The game's numeric item id
    ///
    /// # Returns
    /// - `Ok(())` - Rows deleted, or none existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, team_id: &str, wow_id: i32) -> Result<(), DbErr> {
        entity::prelude::Queue::delete_many()
            .filter(entity::queue::Column::TeamId.eq(team_id))
            .filter(entity::queue::Column::WowId.eq(wow_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether any queue rows exist for a (team, item) pair.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    /// - `wow_id` - The game's numeric item id
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether at least one row exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, team_id: &str, wow_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Queue::find()
            .filter(entity::queue::Column::TeamId.eq(team_id))
            .filter(entity::queue::Column::WowId.eq(wow_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads every queue of a team, grouped by item.
    ///
    /// Feeds the full-team aggregate. Groups are ordered by `wow_id`,
    /// entries within a group by position.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    ///
    /// # Returns
    /// - `Ok(Vec<ItemQueue>)` - One group per item with at least one row
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_for_team(&self, team_id: &str) -> Result<Vec<ItemQueue>, DbErr> {
        let rows = entity::prelude::Queue::find()
            .filter(entity::queue::Column::TeamId.eq(team_id))
            .order_by_asc(entity::queue::Column::WowId)
            .order_by_asc(entity::queue::Column::Position)
            .find_also_related(entity::prelude::Raider)
            .all(self.db)
            .await?;

        let mut queues: Vec<ItemQueue> = Vec::new();
        for (row, raider) in rows {
            let entry = QueueEntry {
                position: row.position,
                raider: Raider::from_entity(Self::require_raider(raider, &row.id)?),
            };
            match queues.last_mut() {
                Some(group) if group.wow_id == row.wow_id => group.entries.push(entry),
                _ => queues.push(ItemQueue {
                    team_id: team_id.to_string(),
                    wow_id: row.wow_id,
                    entries: vec![entry],
                }),
            }
        }

        Ok(queues)
    }

    async fn get_on<C: ConnectionTrait>(
        db: &C,
        team_id: &str,
        wow_id: i32,
    ) -> Result<Vec<QueueEntry>, DbErr> {
        let rows = entity::prelude::Queue::find()
            .filter(entity::queue::Column::TeamId.eq(team_id))
            .filter(entity::queue::Column::WowId.eq(wow_id))
            .order_by_asc(entity::queue::Column::Position)
            .find_also_related(entity::prelude::Raider)
            .all(db)
            .await?;

        rows.into_iter()
            .map(|(row, raider)| {
                Ok(QueueEntry {
                    position: row.position,
                    raider: Raider::from_entity(Self::require_raider(raider, &row.id)?),
                })
            })
            .collect()
    }

    // The raider FK makes an orphaned queue row impossible; hitting this is
    // a data integrity failure, not a user error.
    fn require_raider(
        raider: Option<entity::raider::Model>,
        queue_id: &str,
    ) -> Result<entity::raider::Model, DbErr> {
        raider.ok_or_else(|| {
            DbErr::RecordNotFound(format!("queue row {queue_id} references a missing raider"))
        })
    }
}
