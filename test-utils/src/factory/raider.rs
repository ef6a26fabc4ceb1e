//! Raider factory for creating test roster entries.

use entity::enums::Class;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_row_id, next_id};

/// Factory for creating test raiders with customizable fields.
pub struct RaiderFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    team_id: String,
    class: Class,
    is_active: bool,
}

impl<'a> RaiderFactory<'a> {
    /// Creates a new RaiderFactory with default values.
    ///
    /// Defaults:
    /// - name: `"raider{n}"` where n is auto-incremented
    /// - class: `Warrior`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_row_id(),
            name: format!("raider{}", n),
            team_id: String::new(),
            class: Class::Warrior,
            is_active: true,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub fn class(mut self, class: Class) -> Self {
        self.class = class;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the raider entity into the database.
    pub async fn build(self) -> Result<entity::raider::Model, DbErr> {
        entity::raider::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            team_id: ActiveValue::Set(self.team_id),
            class: ActiveValue::Set(self.class),
            is_active: ActiveValue::Set(self.is_active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active raider in the given team with default values.
pub async fn create_raider(
    db: &DatabaseConnection,
    team_id: &str,
) -> Result<entity::raider::Model, DbErr> {
    RaiderFactory::new(db).team_id(team_id).build().await
}
