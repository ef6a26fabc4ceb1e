//! Domain models for loot-queue operations.

use crate::server::model::raider::Raider;

/// One slot in an item's priority queue, joined with its raider.
///
/// Serializable because queue snapshots are embedded in log rows and in the
/// cached full-team aggregate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueueEntry {
    /// 1-based position; lower means higher priority.
    pub position: i32,
    /// The raider holding this slot.
    pub raider: Raider,
}

/// The ordered queue of one (team, item) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQueue {
    pub team_id: String,
    pub wow_id: i32,
    /// Entries ordered by ascending position.
    pub entries: Vec<QueueEntry>,
}

/// Outcome of a transactional queue replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceQueueOutcome {
    /// All rows swapped; the fresh ordered queue.
    Replaced(Vec<QueueEntry>),
    /// At least one raider id does not exist; nothing was changed.
    UnknownRaider,
}
