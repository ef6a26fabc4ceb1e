use serde::{Deserialize, Serialize};

use crate::model::raider::RaiderDto;
use crate::server::model::queue::{ItemQueue, QueueEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueDto {
    pub position: i32,
    pub raider: RaiderDto,
}

impl QueueDto {
    pub fn from_model(entry: QueueEntry) -> Self {
        Self {
            position: entry.position,
            raider: RaiderDto::from_model(entry.raider),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueListDto {
    pub team_id: String,
    pub wow_item_id: i32,
    pub queue: Vec<QueueDto>,
}

impl QueueListDto {
    pub fn from_entries(team_id: String, wow_item_id: i32, entries: Vec<QueueEntry>) -> Self {
        Self {
            team_id,
            wow_item_id,
            queue: entries.into_iter().map(QueueDto::from_model).collect(),
        }
    }

    pub fn from_model(queue: ItemQueue) -> Self {
        Self::from_entries(queue.team_id, queue.wow_id, queue.entries)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateQueueDto {
    pub team_id: String,
    pub wow_item_id: i32,
    pub raiders: Vec<String>,
}
