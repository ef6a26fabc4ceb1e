use entity::enums::Class;
use serde::{Deserialize, Serialize};

use crate::server::model::raider::Raider;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaiderDto {
    pub id: String,
    pub name: String,
    pub team_id: String,
    pub class_name: Class,
    pub is_active: bool,
}

impl RaiderDto {
    pub fn from_model(raider: Raider) -> Self {
        Self {
            id: raider.id,
            name: raider.name,
            team_id: raider.team_id,
            class_name: raider.class,
            is_active: raider.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRaiderDto {
    pub name: String,
    pub team_id: String,
    pub class_name: Class,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}
