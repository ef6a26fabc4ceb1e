//! Loot-queue replacement, removal, and the audit trail they leave.
//!
//! A queue is always written whole: the caller sends the complete raider
//! order for one item and the previous queue is swapped out in a single
//! transaction. Every successful replacement appends a log row with a JSON
//! snapshot of the queue as written, then drops the team's cached aggregate.

use sea_orm::DatabaseConnection;

use entity::enums::Language;

use crate::model::queue::QueueDto;
use crate::server::{
    cache::{full_team_key, TtlCache},
    data::{log::LogRepository, queue::QueueRepository, team::TeamRepository},
    error::{api::ApiError, AppError},
    model::{
        log::CreateLogParams,
        queue::{QueueEntry, ReplaceQueueOutcome},
    },
    service::item::ItemService,
    wowhead::ItemApi,
};

/// Service providing the loot-queue business logic.
pub struct QueueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueService<'a> {
    /// Creates a new QueueService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `QueueService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the ordered queue of one (team, item) pair.
    ///
    /// An absent queue is an empty list, not an error.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    /// - `wow_id` - The game's numeric item id
    ///
    /// # Returns
    /// - `Ok(Vec<QueueEntry>)` - Entries in ascending position order
    pub async fn get(&self, team_id: &str, wow_id: i32) -> Result<Vec<QueueEntry>, AppError> {
        Ok(QueueRepository::new(self.db).get(team_id, wow_id).await?)
    }

    /// Replaces the queue of one (team, item) pair with a fresh order.
    ///
    /// The item is resolved before anything is written, with the team's
    /// addon and the caller's display language; a resolution miss fails the
    /// whole operation. On success a log row snapshots the new queue and
    /// the team's cached aggregate is invalidated.
    ///
    /// # Arguments
    /// - `cache` - Aggregate cache, invalidated on success
    /// - `item_api` - External item lookup for unresolved items
    /// - `lang` - The caller's display language, used for item resolution
    /// - `user_id` - The authenticated caller, recorded in the log
    /// - `team_id` - The team's row id
    /// - `wow_id` - The game's numeric item id
    /// - `raider_ids` - Raider row ids in priority order; empty clears
    ///
    /// # Returns
    /// - `Ok(Vec<QueueEntry>)` - The fresh queue in position order
    /// - `Err(AppError::ApiErr)` - Unknown team, caller is not the owner,
    ///   unresolvable item, or an unknown raider id
    #[allow(clippy::too_many_arguments)]
    pub async fn replace(
        &self,
        cache: &dyn TtlCache,
        item_api: &dyn ItemApi,
        lang: Language,
        user_id: &str,
        team_id: &str,
        wow_id: i32,
        raider_ids: &[String],
    ) -> Result<Vec<QueueEntry>, AppError> {
        let Some(with_owner) = TeamRepository::new(self.db).find_with_owner(team_id).await? else {
            return Err(ApiError::TeamNotExists.into());
        };
        if with_owner.owner.id != user_id {
            return Err(ApiError::UserNotTeamOwner.into());
        }

        ItemService::new(self.db, item_api)
            .resolve(wow_id, with_owner.team.addon, lang)
            .await?;

        let entries = match QueueRepository::new(self.db)
            .replace(team_id, wow_id, raider_ids)
            .await?
        {
            ReplaceQueueOutcome::Replaced(entries) => entries,
            ReplaceQueueOutcome::UnknownRaider => return Err(ApiError::RaiderNotExists.into()),
        };

        let snapshot: Vec<QueueDto> = entries
            .iter()
            .cloned()
            .map(QueueDto::from_model)
            .collect();
        let queue_json = serde_json::to_string(&snapshot)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        LogRepository::new(self.db)
            .create(CreateLogParams {
                team_id: team_id.to_string(),
                user_id: user_id.to_string(),
                wow_id,
                queue: queue_json,
            })
            .await?;

        cache.delete(&full_team_key(team_id)).await;

        Ok(entries)
    }

    /// Removes the queue of one (team, item) pair entirely.
    ///
    /// # Arguments
    /// - `cache` - Aggregate cache, invalidated on success
    /// - `user_id` - The authenticated caller
    /// - `team_id` - The team's row id
    /// - `wow_id` - The game's numeric item id
    ///
    /// # Returns
    /// - `Ok(())` - All rows for the pair deleted
    /// - `Err(AppError::ApiErr)` - Unknown team, caller is not the owner,
    ///   or no queue exists for the pair
    pub async fn remove(
        &self,
        cache: &dyn TtlCache,
        user_id: &str,
        team_id: &str,
        wow_id: i32,
    ) -> Result<(), AppError> {
        let Some(owner) = TeamRepository::new(self.db).owner(team_id).await? else {
            return Err(ApiError::TeamNotExists.into());
        };
        if owner.id != user_id {
            return Err(ApiError::UserNotTeamOwner.into());
        }

        let repo = QueueRepository::new(self.db);
        if !repo.exists(team_id, wow_id).await? {
            return Err(ApiError::QueueNotExists.into());
        }

        cache.delete(&full_team_key(team_id)).await;
        repo.delete(team_id, wow_id).await?;

        Ok(())
    }
}
