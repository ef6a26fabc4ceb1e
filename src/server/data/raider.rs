//! Raider data repository for database operations.
//!
//! Raiders are never hard-deleted; removal flips `is_active` so queue
//! snapshots and audit logs keep resolving. The active-uniqueness rule
//! (one active raider per team/name/class triple) is enforced with a
//! pre-check rather than a database constraint, because inactive duplicates
//! are expected history.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::{
    model::raider::{CreateRaiderParams, Raider},
    util::id::new_id,
};

/// Outcome of a raider creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRaiderOutcome {
    /// The raider was inserted.
    Created(Raider),
    /// An active raider with the same team, name, and class already exists.
    DuplicateActive,
}

/// Repository providing database operations for the raider roster.
pub struct RaiderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaiderRepository<'a> {
    /// Creates a new RaiderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RaiderRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a raider after the active-uniqueness pre-check.
    ///
    /// The check-then-insert sequence is not atomic; a concurrent insert of
    /// the same triple can slip through. The duplicate is cosmetic rather
    /// than corrupting, so the race is accepted.
    ///
    /// # Arguments
    /// - `param` - Raider creation parameters
    ///
    /// # Returns
    /// - `Ok(CreateRaiderOutcome)` - See `CreateRaiderOutcome`
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create(&self, param: CreateRaiderParams) -> Result<CreateRaiderOutcome, DbErr> {
        let duplicates = entity::prelude::Raider::find()
            .filter(entity::raider::Column::IsActive.eq(true))
            .filter(entity::raider::Column::TeamId.eq(&param.team_id))
            .filter(entity::raider::Column::Name.eq(&param.name))
            .filter(entity::raider::Column::Class.eq(param.class))
            .count(self.db)
            .await?;

        if duplicates > 0 {
            return Ok(CreateRaiderOutcome::DuplicateActive);
        }

        let entity = entity::raider::Entity::insert(entity::raider::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(param.name),
            team_id: ActiveValue::Set(param.team_id),
            class: ActiveValue::Set(param.class),
            is_active: ActiveValue::Set(param.is_active),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(CreateRaiderOutcome::Created(Raider::from_entity(entity)))
    }

    /// Finds a raider by id.
    ///
    /// # Arguments
    /// - `id` - The raider's row id
    ///
    /// # Returns
    /// - `Ok(Some(Raider))` - Raider found, active or not
    /// - `Ok(None)` - No raider with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Raider>, DbErr> {
        let entity = entity::prelude::Raider::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Raider::from_entity))
    }

    /// Soft-deletes a raider by clearing `is_active`.
    ///
    /// Queue rows referencing the raider stay in place; the roster simply
    /// stops showing them as active.
    ///
    /// # Arguments
    /// - `id` - The raider's row id
    ///
    /// # Returns
    /// - `Ok(true)` - Raider deactivated (or was already inactive)
    /// - `Ok(false)` - No raider with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn deactivate(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Raider::update_many()
            .filter(entity::raider::Column::Id.eq(id))
            .col_expr(
                entity::raider::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
