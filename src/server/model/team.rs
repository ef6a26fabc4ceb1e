//! Domain models for team data operations.

use chrono::{DateTime, Utc};
use entity::enums::Addon;

use crate::server::model::user::User;

/// Raid team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Unique identifier for the team.
    pub id: String,
    /// Public team name, unique across the service.
    pub name: String,
    /// Bcrypt hash of the team password.
    pub password: String,
    /// Game edition the team raids in.
    pub addon: Addon,
    /// Whether the team currently has VIP status.
    pub is_vip: bool,
    /// When the VIP status lapses, if any.
    pub vip_end: Option<DateTime<Utc>>,
    /// Id of the owning user.
    pub owner_id: String,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Team` - The converted team domain model
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            password: entity.password,
            addon: entity.addon,
            is_vip: entity.is_vip,
            vip_end: entity.vip_end,
            owner_id: entity.owner_id,
        }
    }
}

/// A team joined with its owning user, as needed by ownership checks and
/// the full-team aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWithOwner {
    pub team: Team,
    pub owner: User,
}

/// Parameters for creating a new team.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    /// Public team name.
    pub name: String,
    /// Bcrypt hash of the team password.
    pub password: String,
    /// Game edition the team raids in.
    pub addon: Addon,
    /// Id of the owning user.
    pub owner_id: String,
}

/// Parameters for a partial team update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParams {
    pub name: Option<String>,
    pub addon: Option<Addon>,
    pub is_vip: Option<bool>,
    pub vip_end: Option<DateTime<Utc>>,
    /// Bcrypt hash of the replacement team password.
    pub password: Option<String>,
}
