//! Team data repository for database operations.
//!
//! Provides the `TeamRepository` for team CRUD, owner joins used by the
//! ownership checks, and the name-to-id lookup behind the cached team pages.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::server::{
    model::{
        team::{CreateTeamParams, Team, TeamWithOwner, UpdateTeamParams},
        user::User,
    },
    util::id::new_id,
};

/// Repository providing database operations for teams.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    /// Creates a new TeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TeamRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team from parameter model.
    ///
    /// A name collision surfaces as a unique constraint violation; callers
    /// inspect `DbErr::sql_err()` to map it to the name-not-unique code.
    ///
    /// # Arguments
    /// - `param` - Team creation parameters with a pre-hashed password
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error during insert, including name conflicts
    pub async fn create(&self, param: CreateTeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::Entity::insert(entity::team::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(param.name),
            password: ActiveValue::Set(param.password),
            addon: ActiveValue::Set(param.addon),
            is_vip: ActiveValue::Set(false),
            vip_end: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(param.owner_id),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Finds a team by id.
    ///
    /// # Arguments
    /// - `id` - The team's row id
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds a team by its public name.
    ///
    /// # Arguments
    /// - `name` - The team's name
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found
    /// - `Ok(None)` - No team with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Resolves a team name to its id without loading the full row.
    ///
    /// Backs the `team-name:{name}` cache entry. Names are immutable, so
    /// the mapping never goes stale.
    ///
    /// # Arguments
    /// - `name` - The team's name
    ///
    /// # Returns
    /// - `Ok(Some(id))` - The team's row id
    /// - `Ok(None)` - No team with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn id_by_name(&self, name: &str) -> Result<Option<String>, DbErr> {
        let id = entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Id)
            .filter(entity::team::Column::Name.eq(name))
            .into_tuple::<String>()
            .one(self.db)
            .await?;

        Ok(id)
    }

    /// Finds a team by id joined with its owning user.
    ///
    /// # Arguments
    /// - `id` - The team's row id
    ///
    /// # Returns
    /// - `Ok(Some(TeamWithOwner))` - Team and owner found
    /// - `Ok(None)` - No team with that id, or its owner row is gone
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_owner(&self, id: &str) -> Result<Option<TeamWithOwner>, DbErr> {
        let result = entity::prelude::Team::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(Self::zip_owner(result))
    }

    /// Finds a team by name joined with its owning user.
    ///
    /// # Arguments
    /// - `name` - The team's name
    ///
    /// # Returns
    /// - `Ok(Some(TeamWithOwner))` - Team and owner found
    /// - `Ok(None)` - No team with that name, or its owner row is gone
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name_with_owner(
        &self,
        name: &str,
    ) -> Result<Option<TeamWithOwner>, DbErr> {
        let result = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(Self::zip_owner(result))
    }

    /// Loads the owning user of a team.
    ///
    /// # Arguments
    /// - `team_id` - The team's row id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The owner
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn owner(&self, team_id: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_with_owner(team_id)
            .await?
            .map(|with_owner| with_owner.owner))
    }

    /// Applies a partial update to a team.
    ///
    /// Only fields present in `param` are written; everything else keeps its
    /// stored value.
    ///
    /// # Arguments
    /// - `id` - The team's row id
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - The team after the update
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during update, including name conflicts
    pub async fn update(
        &self,
        id: &str,
        param: UpdateTeamParams,
    ) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;
        let Some(entity) = entity else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(addon) = param.addon {
            active.addon = ActiveValue::Set(addon);
        }
        if let Some(is_vip) = param.is_vip {
            active.is_vip = ActiveValue::Set(is_vip);
        }
        if let Some(vip_end) = param.vip_end {
            active.vip_end = ActiveValue::Set(Some(vip_end));
        }
        if let Some(password) = param.password {
            active.password = ActiveValue::Set(password);
        }

        let entity = entity::prelude::Team::update(active).exec(self.db).await?;

        Ok(Some(Team::from_entity(entity)))
    }

    /// Deletes a team row. Raiders, queues, and logs cascade.
    ///
    /// # Arguments
    /// - `id` - The team's row id
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    fn zip_owner(
        result: Option<(entity::team::Model, Option<entity::user::Model>)>,
    ) -> Option<TeamWithOwner> {
        let (team, owner) = result?;
        let owner = owner?;
        Some(TeamWithOwner {
            team: Team::from_entity(team),
            owner: User::from_entity(owner),
        })
    }
}
