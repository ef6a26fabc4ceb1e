//! Queue factory for creating individual loot queue slots.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::new_row_id;

/// Factory for creating queue slot entities.
///
/// Prefer `create_queue_rows` for whole-queue setup; single-slot creation is
/// mostly useful for corrupt-state tests.
pub struct QueueFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    position: i32,
    team_id: String,
    raider_id: String,
    wow_id: i32,
}

impl<'a> QueueFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: new_row_id(),
            position: 1,
            team_id: String::new(),
            raider_id: String::new(),
            wow_id: 0,
        }
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub fn raider_id(mut self, raider_id: impl Into<String>) -> Self {
        self.raider_id = raider_id.into();
        self
    }

    pub fn wow_id(mut self, wow_id: i32) -> Self {
        self.wow_id = wow_id;
        self
    }

    /// Builds and inserts the queue slot into the database.
    pub async fn build(self) -> Result<entity::queue::Model, DbErr> {
        entity::queue::ActiveModel {
            id: ActiveValue::Set(self.id),
            position: ActiveValue::Set(self.position),
            team_id: ActiveValue::Set(self.team_id),
            raider_id: ActiveValue::Set(self.raider_id),
            wow_id: ActiveValue::Set(self.wow_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a full queue for (team, item): positions 1..N over the given
/// raider ids, in order.
pub async fn create_queue_rows(
    db: &DatabaseConnection,
    team_id: &str,
    wow_id: i32,
    raider_ids: &[&str],
) -> Result<Vec<entity::queue::Model>, DbErr> {
    let mut rows = Vec::with_capacity(raider_ids.len());
    for (i, raider_id) in raider_ids.iter().enumerate() {
        let row = QueueFactory::new(db)
            .position((i + 1) as i32)
            .team_id(team_id)
            .raider_id(*raider_id)
            .wow_id(wow_id)
            .build()
            .await?;
        rows.push(row);
    }
    Ok(rows)
}
