//! Team lifecycle and the cached full-team aggregate.
//!
//! Deletion is a two-step confirmation: the owner requests it by team name,
//! receives a short-lived signed token by email, and completes it with that
//! token. Ownership is checked on both steps since the team may have changed
//! hands while the token was in flight.

use std::time::Duration;

use bcrypt::DEFAULT_COST;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use entity::enums::Language;

use crate::model::{
    queue::QueueListDto,
    team::{FullTeamDto, TeamDto},
    user::UserDto,
};
use crate::server::{
    cache::{full_team_key, team_name_key, TtlCache},
    config::TeamSettings,
    data::{queue::QueueRepository, team::TeamRepository},
    error::{api::ApiError, AppError},
    mailer::{delete_team_email, Mailer, MailerError},
    model::team::{CreateTeamParams, Team, UpdateTeamParams},
    token::{TokenCodec, TokenKind},
};

/// Service providing the team lifecycle business logic.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenCodec,
    settings: &'a TeamSettings,
}

impl<'a> TeamService<'a> {
    /// Creates a new TeamService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token codec for delete-confirmation tokens
    /// - `settings` - Team naming rules and token lifetime
    ///
    /// # Returns
    /// - `TeamService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenCodec, settings: &'a TeamSettings) -> Self {
        Self {
            db,
            tokens,
            settings,
        }
    }

    /// Fetches one team by id.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    ///
    /// # Returns
    /// - `Ok(Team)` - The team
    /// - `Err(AppError::ApiErr)` - No such team
    pub async fn get_team(&self, team_id: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ApiError::TeamNotExists.into())
    }

    /// Fetches one team by its public name.
    ///
    /// # Arguments
    /// - `name` - The team name
    ///
    /// # Returns
    /// - `Ok(Team)` - The team
    /// - `Err(AppError::ApiErr)` - No such team
    pub async fn get_team_by_name(&self, name: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| ApiError::TeamNotExists.into())
    }

    /// Creates a team owned by the caller.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated caller, who becomes the owner
    /// - `name` - Public team name
    /// - `password` - Plaintext team password, stored as a bcrypt hash
    /// - `addon` - Game edition the team raids in
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::ApiErr)` - Name is reserved or already taken
    pub async fn create(
        &self,
        user_id: &str,
        name: &str,
        password: &str,
        addon: entity::enums::Addon,
    ) -> Result<Team, AppError> {
        self.check_name(name)?;

        let hash = bcrypt::hash(password, DEFAULT_COST)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let team = TeamRepository::new(self.db)
            .create(CreateTeamParams {
                name: name.to_string(),
                password: hash,
                addon,
                owner_id: user_id.to_string(),
            })
            .await
            .map_err(map_name_conflict)?;

        info!("User {} created team {}", user_id, team.id);

        Ok(team)
    }

    /// Applies a partial update to a team the caller owns.
    ///
    /// VIP status is not reachable from here; only name, addon, and
    /// password are client-writable.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated caller
    /// - `team_id` - The team's row id
    /// - `name` - Replacement name, if changing
    /// - `addon` - Replacement game edition, if changing
    /// - `password` - Plaintext replacement password, if changing
    ///
    /// # Returns
    /// - `Ok(Team)` - The team after the update
    /// - `Err(AppError::ApiErr)` - Unknown team, caller is not the owner,
    ///   or the new name is reserved or taken
    pub async fn update(
        &self,
        user_id: &str,
        team_id: &str,
        name: Option<String>,
        addon: Option<entity::enums::Addon>,
        password: Option<String>,
    ) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);
        self.check_ownership(&repo, team_id, user_id).await?;

        if let Some(name) = name.as_deref() {
            self.check_name(name)?;
        }

        let password = match password {
            Some(plain) => Some(
                bcrypt::hash(&plain, DEFAULT_COST)
                    .map_err(|e| AppError::InternalError(e.to_string()))?,
            ),
            None => None,
        };

        let team = repo
            .update(
                team_id,
                UpdateTeamParams {
                    name,
                    addon,
                    password,
                    ..Default::default()
                },
            )
            .await
            .map_err(map_name_conflict)?
            .ok_or(ApiError::TeamNotExists)?;

        Ok(team)
    }

    /// Emails the owner a delete-confirmation token for their team.
    ///
    /// # Arguments
    /// - `mailer` - Transport for the confirmation email
    /// - `lang` - Language for the email copy
    /// - `user_id` - The authenticated caller
    /// - `team_name` - Name of the team to delete
    ///
    /// # Returns
    /// - `Ok(())` - Token sent to the owner's email address
    /// - `Err(AppError::ApiErr)` - Unknown team, caller is not the owner,
    ///   or the owner's address does not exist
    pub async fn request_delete(
        &self,
        mailer: &dyn Mailer,
        lang: Language,
        user_id: &str,
        team_name: &str,
    ) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);
        let Some(with_owner) = repo.find_by_name_with_owner(team_name).await? else {
            return Err(ApiError::TeamNotExists.into());
        };
        if with_owner.owner.id != user_id {
            return Err(ApiError::UserNotTeamOwner.into());
        }

        let token = self.tokens.create(
            TokenKind::DeleteTeam,
            &with_owner.team.id,
            self.settings.delete_team_token_ttl,
        )?;

        let (subject, body) = delete_team_email(lang, &token);
        match mailer.send(&with_owner.owner.email, &subject, &body).await {
            Ok(()) => Ok(()),
            Err(MailerError::NonExistentEmail) => Err(ApiError::EmailNonExistent.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a team under a delete-confirmation token.
    ///
    /// Raiders, queues, and logs cascade with the team row. The cached
    /// aggregate is left to expire; the name-to-id mapping was already a
    /// dangling reference the moment the row went away.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated caller
    /// - `token` - Delete-confirmation token from the email
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted
    /// - `Err(AppError::ApiErr)` - Token invalid, team already gone, or
    ///   ownership changed since the token was issued
    pub async fn delete(&self, user_id: &str, token: &str) -> Result<(), AppError> {
        let claims = self
            .tokens
            .verify(token, TokenKind::DeleteTeam)
            .map_err(|_| ApiError::DeleteTeamTokenInvalid)?;
        let team_id = claims.sub;

        let repo = TeamRepository::new(self.db);
        self.check_ownership(&repo, &team_id, user_id).await?;

        repo.delete(&team_id).await?;

        info!("User {} deleted team {}", user_id, team_id);

        Ok(())
    }

    /// Fetches the full-team aggregate by team name, through the cache.
    ///
    /// Two cache entries are in play: the name-to-id mapping, which is
    /// immutable and only ever expires, and the aggregate itself, which is
    /// invalidated on queue changes and otherwise left to expire. A corrupt
    /// cached aggregate is treated as a miss and rebuilt.
    ///
    /// # Arguments
    /// - `cache` - Aggregate cache
    /// - `cache_ttl` - Lifetime for freshly written cache entries
    /// - `name` - The team name
    ///
    /// # Returns
    /// - `Ok(FullTeamDto)` - Team, owner, and all queues grouped by item
    /// - `Err(AppError::ApiErr)` - No such team
    pub async fn get_full_team(
        &self,
        cache: &dyn TtlCache,
        cache_ttl: Duration,
        name: &str,
    ) -> Result<FullTeamDto, AppError> {
        let repo = TeamRepository::new(self.db);

        let name_key = team_name_key(name);
        let team_id = match cache.get(&name_key).await {
            Some(id) => id,
            None => {
                let Some(id) = repo.id_by_name(name).await? else {
                    return Err(ApiError::TeamNotExists.into());
                };
                cache.set(&name_key, &id, Some(cache_ttl)).await;
                id
            }
        };

        let team_key = full_team_key(&team_id);
        if let Some(cached) = cache.get(&team_key).await {
            match serde_json::from_str::<FullTeamDto>(&cached) {
                Ok(full_team) => return Ok(full_team),
                Err(e) => warn!("Discarding corrupt cached aggregate for {}: {}", team_id, e),
            }
        }

        let Some(with_owner) = repo.find_with_owner(&team_id).await? else {
            return Err(ApiError::TeamNotExists.into());
        };
        let queues = QueueRepository::new(self.db)
            .get_all_for_team(&team_id)
            .await?;

        let full_team = FullTeamDto {
            team: TeamDto::from_model(with_owner.team),
            owner: UserDto::from_model(with_owner.owner),
            queues: queues.into_iter().map(QueueListDto::from_model).collect(),
        };

        if let Ok(serialized) = serde_json::to_string(&full_team) {
            cache.set(&team_key, &serialized, Some(cache_ttl)).await;
        }

        Ok(full_team)
    }

    /// Rejects names that would shadow reserved routes.
    fn check_name(&self, name: &str) -> Result<(), AppError> {
        let lowered = name.to_lowercase();
        if self.settings.restricted_names.iter().any(|r| *r == lowered) {
            return Err(ApiError::TeamNameNotUnique.into());
        }
        Ok(())
    }

    /// Resolves the team's owner and checks it is the caller.
    async fn check_ownership(
        &self,
        repo: &TeamRepository<'_>,
        team_id: &str,
        user_id: &str,
    ) -> Result<(), AppError> {
        let Some(owner) = repo.owner(team_id).await? else {
            return Err(ApiError::TeamNotExists.into());
        };
        if owner.id != user_id {
            return Err(ApiError::UserNotTeamOwner.into());
        }
        Ok(())
    }
}

/// Maps a unique-constraint violation on the name column to the coded
/// client error; anything else stays a database error.
fn map_name_conflict(err: sea_orm::DbErr) -> AppError {
    match err.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => ApiError::TeamNameNotUnique.into(),
        _ => err.into(),
    }
}
