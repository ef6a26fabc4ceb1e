use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::queue::QueueDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogDto {
    pub created_at: DateTime<Utc>,
    pub queue: Vec<QueueDto>,
}

/// A page of a team's audit log, echoing the filter it was produced with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogListDto {
    pub team_id: String,
    pub wow_item_id: Option<i32>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub logs: Vec<LogDto>,
}
