//! Roster management for a team's raiders.
//!
//! Raiders are never physically deleted while the team lives: removal only
//! clears the active flag, so queue history in the audit log keeps resolving
//! to a real raider row.

use sea_orm::DatabaseConnection;

use entity::enums::Class;

use crate::server::{
    data::{
        raider::{CreateRaiderOutcome, RaiderRepository},
        team::TeamRepository,
    },
    error::{api::ApiError, AppError},
    model::raider::{CreateRaiderParams, Raider},
};

/// Service providing the roster business logic.
pub struct RaiderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaiderService<'a> {
    /// Creates a new RaiderService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RaiderService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches one raider by id.
    ///
    /// # Arguments
    /// - `raider_id` - The raider's row id
    ///
    /// # Returns
    /// - `Ok(Raider)` - The raider
    /// - `Err(AppError::ApiErr)` - No such raider
    pub async fn get_raider(&self, raider_id: &str) -> Result<Raider, AppError> {
        RaiderRepository::new(self.db)
            .find_by_id(raider_id)
            .await?
            .ok_or_else(|| ApiError::RaiderNotExists.into())
    }

    /// Adds a raider to a team the caller owns.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated caller
    /// - `team_id` - The team's row id
    /// - `name` - Raider name, unique per (team, class) among active raiders
    /// - `class` - The raider's class
    /// - `is_active` - Initial active flag
    ///
    /// # Returns
    /// - `Ok(Raider)` - The created raider
    /// - `Err(AppError::ApiErr)` - Unknown team, caller is not the owner, or
    ///   an active raider with the same name and class already exists
    pub async fn create(
        &self,
        user_id: &str,
        team_id: &str,
        name: &str,
        class: Class,
        is_active: bool,
    ) -> Result<Raider, AppError> {
        self.check_ownership(team_id, user_id).await?;

        let outcome = RaiderRepository::new(self.db)
            .create(CreateRaiderParams {
                name: name.to_string(),
                team_id: team_id.to_string(),
                class,
                is_active,
            })
            .await?;

        match outcome {
            CreateRaiderOutcome::Created(raider) => Ok(raider),
            CreateRaiderOutcome::DuplicateActive => Err(ApiError::RaiderNotUnique.into()),
        }
    }

    /// Removes a raider from the roster of a team the caller owns.
    ///
    /// The raider row stays behind inactive; its queue slots are untouched
    /// until the next queue replacement drops them. The cached team
    /// aggregate is left to expire on its own, same as for additions.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated caller
    /// - `raider_id` - The raider's row id
    ///
    /// # Returns
    /// - `Ok(())` - Raider deactivated
    /// - `Err(AppError::ApiErr)` - Unknown raider, or caller does not own
    ///   the raider's team
    pub async fn delete(&self, user_id: &str, raider_id: &str) -> Result<(), AppError> {
        let repo = RaiderRepository::new(self.db);
        let Some(raider) = repo.find_by_id(raider_id).await? else {
            return Err(ApiError::RaiderNotExists.into());
        };

        self.check_ownership(&raider.team_id, user_id).await?;

        if !repo.deactivate(raider_id).await? {
            return Err(ApiError::RaiderNotExists.into());
        }

        Ok(())
    }

    async fn check_ownership(&self, team_id: &str, user_id: &str) -> Result<(), AppError> {
        let Some(owner) = TeamRepository::new(self.db).owner(team_id).await? else {
            return Err(ApiError::TeamNotExists.into());
        };
        if owner.id != user_id {
            return Err(ApiError::UserNotTeamOwner.into());
        }
        Ok(())
    }
}
