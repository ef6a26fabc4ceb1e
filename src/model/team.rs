use chrono::{DateTime, Utc};
use entity::enums::Addon;
use serde::{Deserialize, Serialize};

use crate::model::{queue::QueueListDto, user::UserDto};
use crate::server::model::team::Team;

/// Public view of a team. The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub addon: Addon,
    pub is_vip: bool,
    pub vip_end: Option<DateTime<Utc>>,
    pub owner_id: String,
}

impl TeamDto {
    pub fn from_model(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            addon: team.addon,
            is_vip: team.is_vip,
            vip_end: team.vip_end,
            owner_id: team.owner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTeamDto {
    pub name: String,
    pub addon: Addon,
    pub password: String,
}

/// Partial team update. VIP status is not client-writable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    pub addon: Option<Addon>,
    pub password: Option<String>,
}

/// The cached team aggregate: team, owner, and every loot queue grouped by
/// item. This exact structure is what gets serialized into the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullTeamDto {
    pub team: TeamDto,
    pub owner: UserDto,
    pub queues: Vec<QueueListDto>,
}
