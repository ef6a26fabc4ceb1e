//! Domain models for raider roster operations.

use entity::enums::Class;

/// Roster member of a team.
///
/// Raiders are soft-deleted: `is_active` false means removed from the
/// roster, but the row survives so historical queues and logs still
/// resolve.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Raider {
    /// Unique identifier for the raider.
    pub id: String,
    /// Character name.
    pub name: String,
    /// Id of the team the raider belongs to.
    pub team_id: String,
    /// Character class.
    pub class: Class,
    /// Whether the raider is currently on the roster.
    pub is_active: bool,
}

impl Raider {
    /// Converts an entity model to a raider domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Raider` - The converted raider domain model
    pub fn from_entity(entity: entity::raider::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            team_id: entity.team_id,
            class: entity.class,
            is_active: entity.is_active,
        }
    }
}

/// Parameters for adding a raider to a team's roster.
#[derive(Debug, Clone)]
pub struct CreateRaiderParams {
    /// Character name.
    pub name: String,
    /// Id of the team to add the raider to.
    pub team_id: String,
    /// Character class.
    pub class: Class,
    /// Initial roster state.
    pub is_active: bool,
}
