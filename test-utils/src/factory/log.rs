//! Log factory for creating audit log rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::new_row_id;

/// Factory for creating audit log entities.
pub struct LogFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    team_id: String,
    user_id: String,
    wow_id: i32,
    created_at: chrono::DateTime<Utc>,
    queue: String,
}

impl<'a> LogFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: new_row_id(),
            team_id: String::new(),
            user_id: String::new(),
            wow_id: 0,
            created_at: Utc::now(),
            queue: "[]".to_string(),
        }
    }

    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn wow_id(mut self, wow_id: i32) -> Self {
        self.wow_id = wow_id;
        self
    }

    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = queue.into();
        self
    }

    /// Builds and inserts the log entity into the database.
    pub async fn build(self) -> Result<entity::log::Model, DbErr> {
        entity::log::ActiveModel {
            id: ActiveValue::Set(self.id),
            team_id: ActiveValue::Set(self.team_id),
            user_id: ActiveValue::Set(self.user_id),
            wow_id: ActiveValue::Set(self.wow_id),
            created_at: ActiveValue::Set(self.created_at),
            queue: ActiveValue::Set(self.queue),
        }
        .insert(self.db)
        .await
    }
}
